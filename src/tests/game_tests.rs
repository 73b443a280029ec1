#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::game::{Game, GameState};
    use crate::input::Input;
    use crate::piece::{Piece, Shape};
    use crate::tests::test_utils::{fill_row_except, filled_cells};
    use crate::tile::{Theme, Tile};
    use std::time::Duration;

    fn running_game() -> Game {
        let mut game = Game::with_seed(10, 30, 1234);
        game.new_game();
        game
    }

    #[test]
    fn test_new_controller_is_idle() {
        let game = Game::with_seed(10, 30, 1);
        assert_eq!(game.state(), GameState::Idle);
        assert!(!game.is_running());
        assert!(!game.has_session());
        assert!(game.current_piece().is_none());
        assert!(game.next_piece().is_none());
        assert_eq!(game.tick_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_new_game_spawns_at_center() {
        let mut game = Game::with_seed(10, 30, 1);
        game.board_mut().set(0, 29, Tile::Red);
        game.new_game();

        assert!(game.is_running());
        assert!(game.board().is_empty());
        assert_eq!(game.spawn_column(), 3);

        let current = game.current_piece().expect("current piece");
        let next = game.next_piece().expect("next piece");
        assert_eq!((current.x(), current.y()), (3, 0));
        assert_eq!((next.x(), next.y()), (3, 0));
    }

    #[test]
    fn test_stop_and_start_keep_state() {
        let mut game = running_game();
        game.on_tick();
        let piece = *game.current_piece().unwrap();

        game.stop();
        assert_eq!(game.state(), GameState::Paused);
        assert!(game.has_session());

        // Nothing moves while paused
        assert!(!game.on_tick().repaint);
        assert!(!game.on_input(Input::Left));
        assert_eq!(game.current_piece(), Some(&piece));

        game.start();
        assert!(game.is_running());
        assert_eq!(game.current_piece(), Some(&piece));
    }

    #[test]
    fn test_toggle_cycles_states() {
        let mut game = Game::with_seed(10, 30, 5);
        game.toggle();
        assert_eq!(game.state(), GameState::Running);
        game.toggle();
        assert_eq!(game.state(), GameState::Paused);
        game.toggle();
        assert_eq!(game.state(), GameState::Running);
    }

    #[test]
    fn test_input_ignored_while_idle() {
        let mut game = Game::with_seed(10, 30, 5);
        assert!(!game.on_input(Input::HardDrop));
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_tick_moves_piece_down() {
        let mut game = running_game();
        let before = *game.current_piece().unwrap();

        let outcome = game.on_tick();
        assert!(outcome.repaint);
        assert!(!outcome.locked);
        assert_eq!(game.current_piece(), Some(&before.moved(0, 1)));
    }

    #[test]
    fn test_tick_locks_and_promotes_next() {
        let mut game = running_game();
        let landed = Piece::with_shape(Shape::Square, 3, 27);
        let next = Piece::with_shape(Shape::Tower, 3, 0);
        game.set_pieces(Some(landed), Some(next));

        let outcome = game.on_tick();
        assert!(outcome.locked);
        assert!(!outcome.restarted);
        assert_eq!(game.board().get(4, 28), Some(Tile::Blue));
        assert_eq!(game.board().get(5, 29), Some(Tile::Blue));
        assert_eq!(game.current_piece(), Some(&next));

        let fresh = game.next_piece().expect("fresh next piece");
        assert_eq!((fresh.x(), fresh.y()), (3, 0));
    }

    #[test]
    fn test_tick_compacts_before_moving() {
        let mut game = running_game();
        fill_row_except(game.board_mut(), 29, &[]);

        let outcome = game.on_tick();
        assert!(outcome.rows_compacted);
        assert!(!game.board().is_row_full(29));
    }

    #[test]
    fn test_moves_respect_walls() {
        let mut game = running_game();
        game.set_pieces(Some(Piece::with_shape(Shape::Tower, -1, 5)), None);

        assert!(game.on_input(Input::Left));
        assert_eq!(game.current_piece().unwrap().x(), -1);

        assert!(game.on_input(Input::Right));
        assert_eq!(game.current_piece().unwrap().x(), 0);

        // Horizontal bar would stick out of the left wall
        game.set_pieces(Some(Piece::with_shape(Shape::Tower, -1, 5)), None);
        let before = *game.current_piece().unwrap();
        game.on_input(Input::Rotate);
        assert_eq!(game.current_piece(), Some(&before));
    }

    #[test]
    fn test_rotate_and_step_down() {
        let mut game = running_game();
        let piece = Piece::with_shape(Shape::Tower, 3, 5);
        game.set_pieces(Some(piece), None);

        game.on_input(Input::Rotate);
        assert_eq!(game.current_piece(), Some(&piece.rotate()));

        game.on_input(Input::Down);
        assert_eq!(game.current_piece(), Some(&piece.rotate().moved(0, 1)));
    }

    #[test]
    fn test_straight_drop_lands_on_floor() {
        let mut game = running_game();
        let piece = Piece::with_shape(Shape::Knight, 3, 0);
        game.set_pieces(Some(piece), None);

        // Step down until the piece stops moving
        loop {
            let y = game.current_piece().unwrap().y();
            game.on_input(Input::Down);
            if game.current_piece().unwrap().y() == y {
                break;
            }
        }

        let landed = game.current_piece().unwrap();
        let lowest = landed.board_cells().map(|(_, y, _)| y).max().unwrap();
        assert_eq!(lowest, 29);
        // Knight reaches local row 3
        assert_eq!(landed.y(), 29 - 3);
    }

    #[test]
    fn test_hard_drop_locks_immediately() {
        let mut game = running_game();
        let piece = Piece::with_shape(Shape::Tower, 3, 0);
        let next = Piece::with_shape(Shape::Square, 3, 0);
        game.set_pieces(Some(piece), Some(next));

        assert!(game.on_input(Input::HardDrop));
        for y in 26..30 {
            assert_eq!(game.board().get(4, y), Some(Tile::Red));
        }
        assert_eq!(filled_cells(game.board()), 4);
        assert_eq!(game.current_piece(), Some(&next));
    }

    #[test]
    fn test_hard_drop_clears_completed_rows() {
        let mut game = running_game();
        fill_row_except(game.board_mut(), 28, &[4, 5]);
        fill_row_except(game.board_mut(), 29, &[4, 5]);
        let square = Piece::with_shape(Shape::Square, 3, 0);
        game.set_pieces(Some(square), Some(Piece::with_shape(Shape::Tower, 3, 0)));

        game.on_input(Input::HardDrop);
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_spawn_collision_restarts_session() {
        let mut game = running_game();
        // Stack up to the spawn point without completing any row
        for y in 1..30 {
            fill_row_except(game.board_mut(), y, &[0]);
        }
        game.set_pieces(
            Some(Piece::with_shape(Shape::Square, 3, -2)),
            Some(Piece::with_shape(Shape::Square, 3, 0)),
        );

        let outcome = game.on_tick();
        assert!(outcome.locked);
        assert!(outcome.restarted);
        assert!(outcome.repaint);

        assert!(game.is_running());
        assert!(game.board().is_empty());
        let current = game.current_piece().expect("fresh current piece");
        let next = game.next_piece().expect("fresh next piece");
        assert_eq!((current.x(), current.y()), (3, 0));
        assert_eq!((next.x(), next.y()), (3, 0));
    }

    #[test]
    fn test_theme_index() {
        let mut game = Game::with_seed(10, 30, 1);
        assert!(game.set_theme_index(2));
        assert_eq!(game.theme(), Theme::Glass);

        assert!(!game.set_theme_index(3));
        assert_eq!(game.theme(), Theme::Glass);
    }

    #[test]
    fn test_decorate_idle_only_when_idle() {
        let mut game = Game::with_seed(10, 30, 8);
        game.decorate_idle();
        assert!(!game.board().is_empty());
        assert!(game.next_piece().is_some());
        assert!(game.current_piece().is_none());

        game.new_game();
        game.decorate_idle();
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_resize_returns_to_idle() {
        let mut game = running_game();
        game.resize(12, 20);

        assert_eq!(game.state(), GameState::Idle);
        assert_eq!((game.board().width(), game.board().height()), (12, 20));
        assert!(game.current_piece().is_none());
        assert_eq!(game.spawn_column(), 4);
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.board.width = 12;
        config.board.height = 2;
        config.game.tick_interval_ms = 100;
        config.game.theme = 1;
        config.game.seed = Some(77);

        let mut a = Game::from_config(&config);
        let mut b = Game::from_config(&config);
        assert_eq!(a.board().width(), 12);
        // Too short to play, pulled up to the minimum
        assert_eq!(a.board().height(), 4);
        assert_eq!(a.tick_interval(), Duration::from_millis(100));
        assert_eq!(a.theme(), Theme::Emboss);

        a.new_game();
        b.new_game();
        assert_eq!(a.current_piece(), b.current_piece());
        assert_eq!(a.next_piece(), b.next_piece());
    }
}
