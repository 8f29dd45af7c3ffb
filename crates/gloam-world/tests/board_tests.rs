use std::sync::Arc;

use gloam_geom::Direction;
use gloam_world::{Block, Board, Texture};

#[test]
fn texture_starts_zeroed_and_bounds_checks() {
    let mut t = Texture::new(3, 2);
    assert_eq!(t.width(), 3);
    assert_eq!(t.height(), 2);
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(t.get(x, y), Some(0));
        }
    }
    assert_eq!(t.get(3, 0), None);
    assert_eq!(t.get(0, 2), None);
    assert!(t.get_mut(3, 0).is_none());

    *t.get_mut(2, 1).unwrap() = b'#';
    assert_eq!(t.get(2, 1), Some(b'#'));
    assert_eq!(t.pixels()[1 * 3 + 2], b'#');
}

#[test]
fn block_faces_by_direction() {
    let tex = Arc::new(Texture::new(2, 2));
    let solid = Block::solid(tex.clone());
    for i in 0..6 {
        assert!(solid.face(Direction::from_index(i)).is_some());
    }

    let walls = Block::walls(tex.clone());
    assert!(walls.face(Direction::North).is_some());
    assert!(walls.face(Direction::East).is_some());
    assert!(walls.face(Direction::Up).is_none());
    assert!(walls.face(Direction::Down).is_none());

    let room = Block::room(tex.clone(), tex.clone());
    assert!(room.face(Direction::North).is_none());
    assert!(room.face(Direction::Up).is_some());
    assert!(room.face(Direction::Down).is_some());

    let mut b = Block::empty();
    assert!(b.face(Direction::West).is_none());
    b.set_face(Direction::West, Some(tex));
    assert!(b.face(Direction::West).is_some());
}

#[test]
fn new_board_shares_one_transparent_block() {
    let board = Board::new(4, 3);
    assert_eq!(board.width(), 4);
    assert_eq!(board.height(), 3);
    let first = board.block_at(0, 0).unwrap();
    for y in 0..3 {
        for x in 0..4 {
            let cell = board.block_at(x, y).unwrap();
            assert!(Arc::ptr_eq(first, cell));
            for i in 0..6 {
                assert!(cell.face(Direction::from_index(i)).is_none());
            }
        }
    }
}

#[test]
fn board_bounds_and_set() {
    let mut board = Board::new(2, 2);
    assert!(board.block_at(-1, 0).is_none());
    assert!(board.block_at(0, -1).is_none());
    assert!(board.block_at(2, 0).is_none());
    assert!(board.block_at(0, 2).is_none());

    let tex = Arc::new(Texture::new(1, 1));
    let wall = Arc::new(Block::solid(tex));
    assert!(board.set(1, 1, wall.clone()));
    assert!(Arc::ptr_eq(board.block_at(1, 1).unwrap(), &wall));
    assert!(!board.set(2, 2, wall.clone()));

    // The slot accessor exposes the shared reference itself.
    *board.block_mut(0, 0).unwrap() = wall.clone();
    assert!(Arc::ptr_eq(board.block_at(0, 0).unwrap(), &wall));
}

#[test]
fn filled_board_shares_given_block() {
    let tex = Arc::new(Texture::new(1, 1));
    let wall = Arc::new(Block::solid(tex));
    let board = Board::filled(3, 3, wall.clone());
    for y in 0..3 {
        for x in 0..3 {
            assert!(Arc::ptr_eq(board.block_at(x, y).unwrap(), &wall));
        }
    }
}
