// Integration tests - public API only

use lights_out::{GameError, LightsOutGame, MAX_GRID_SIZE, MIN_GRID_SIZE};

fn snapshot(game: &LightsOutGame) -> Vec<Vec<bool>> {
    (0..game.size())
        .map(|row| (0..game.size()).map(|col| game.cell(row, col)).collect())
        .collect()
}

mod sizing {
    use super::*;

    #[test]
    fn every_legal_size_is_accepted() {
        let mut game = LightsOutGame::with_seed(3);
        for n in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            game.set_size(n).unwrap();
            assert_eq!(game.size(), n);
            // All n^2 cells are readable after the resize
            let cells = snapshot(&game);
            assert_eq!(cells.iter().map(Vec::len).sum::<usize>(), n * n);
        }
    }

    #[test]
    fn illegal_sizes_are_rejected() {
        let mut game = LightsOutGame::with_seed(3);
        let before = snapshot(&game);
        assert_eq!(
            game.set_size(MIN_GRID_SIZE - 1),
            Err(GameError::OutOfRange { size: MIN_GRID_SIZE - 1 })
        );
        assert_eq!(
            game.set_size(MAX_GRID_SIZE + 1),
            Err(GameError::OutOfRange { size: MAX_GRID_SIZE + 1 })
        );
        assert_eq!(game.size(), MIN_GRID_SIZE);
        assert_eq!(snapshot(&game), before);
    }
}

mod moves {
    use super::*;

    #[test]
    fn out_of_range_moves_are_rejected() {
        let mut game = LightsOutGame::with_seed(5);
        game.set_size(5).unwrap();
        let before = snapshot(&game);
        for (row, col) in [(5, 0), (0, 5), (5, 5), (100, 2)] {
            assert_eq!(
                game.make_move(row, col),
                Err(GameError::InvalidMove { row, col, size: 5 })
            );
        }
        assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn a_repeated_move_cancels_itself() {
        for n in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            let mut game = LightsOutGame::with_seed(99);
            game.set_size(n).unwrap();
            let before = snapshot(&game);
            game.make_move(n / 2, n / 2).unwrap();
            assert_ne!(snapshot(&game), before);
            game.make_move(n / 2, n / 2).unwrap();
            assert_eq!(snapshot(&game), before);
        }
    }

    #[test]
    fn corner_move_flips_only_its_quadrant() {
        let mut game = LightsOutGame::with_seed(11);
        game.set_size(4).unwrap();
        let before = snapshot(&game);
        game.make_move(0, 0).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                let flipped = row < 2 && col < 2;
                assert_eq!(game.cell(row, col), before[row][col] ^ flipped);
            }
        }
    }

    #[test]
    fn center_move_on_3x3_flips_everything() {
        let game0 = LightsOutGame::with_seed(11);
        let before = snapshot(&game0);
        let mut game = LightsOutGame::with_seed(11);
        game.make_move(1, 1).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(game.cell(row, col), !before[row][col]);
            }
        }
    }
}

mod winning {
    use super::*;

    #[test]
    fn game_over_matches_the_all_off_predicate() {
        let mut game = LightsOutGame::with_seed(21);
        for _ in 0..8 {
            let all_off = snapshot(&game).iter().flatten().all(|&cell| !cell);
            assert_eq!(game.is_game_over(), all_off);
            game.new_game();
        }
    }
}

mod randomization {
    use super::*;

    #[test]
    fn seeded_games_are_reproducible() {
        let a = LightsOutGame::with_seed(1234);
        let b = LightsOutGame::with_seed(1234);
        assert_eq!(snapshot(&a), snapshot(&b));
    }

    #[test]
    fn seeded_resize_sequences_are_reproducible() {
        let mut a = LightsOutGame::with_seed(77);
        let mut b = LightsOutGame::with_seed(77);
        for n in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            a.set_size(n).unwrap();
            b.set_size(n).unwrap();
            assert_eq!(snapshot(&a), snapshot(&b));
        }
    }
}
