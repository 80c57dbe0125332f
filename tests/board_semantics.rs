use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use sliding_puzzle::Board;

fn random_board(rng: &mut XorShiftRng, n: usize) -> Board {
    let mut tiles: Vec<u32> = (0..(n * n) as u32).collect();
    tiles.shuffle(rng);
    Board::from_row_major(n, tiles).unwrap()
}

#[test]
fn twin_differs_and_flips_parity() {
    let mut rng = XorShiftRng::seed_from_u64(0x5eed);
    for n in 2..=5 {
        for _ in 0..200 {
            let b = random_board(&mut rng, n);
            let t = b.twin();
            assert_ne!(b, t);
            assert_eq!(t.twin(), b);
            assert_eq!(t.blank(), b.blank());
            assert_ne!(b.has_solvable_parity(), t.has_solvable_parity());
            let differing = b.tiles().iter().zip(t.tiles()).filter(|(x, y)| x != y).count();
            assert_eq!(differing, 2);
        }
    }
}

#[test]
fn goal_metrics_agree() {
    let mut rng = XorShiftRng::seed_from_u64(7);
    for n in 2..=4 {
        let g = Board::goal(n).unwrap();
        assert!(g.is_goal());
        assert_eq!(g.hamming(), 0);
        assert_eq!(g.manhattan(), 0);

        for _ in 0..200 {
            let b = random_board(&mut rng, n);
            assert_eq!(b.manhattan() == 0, b.hamming() == 0);
            assert_eq!(b.hamming() == 0, b.is_goal());
            assert!(b.hamming() <= b.manhattan());
        }
    }
}

#[test]
fn neighbors_are_single_slides_of_the_blank() {
    let mut rng = XorShiftRng::seed_from_u64(11);
    for n in 2..=4 {
        for _ in 0..100 {
            let b = random_board(&mut rng, n);
            let neighbors = b.neighbors();
            assert!((2..=4).contains(&neighbors.len()));

            for nb in &neighbors {
                assert_eq!(nb.dimension(), n);
                assert_eq!(nb.blank().manhattan(b.blank()), 1);
                let differing: Vec<usize> = (0..n * n)
                    .filter(|&i| nb.tiles()[i] != b.tiles()[i])
                    .collect();
                assert_eq!(differing.len(), 2);
                assert!(nb.neighbors().contains(&b));
                assert!(b.manhattan().abs_diff(nb.manhattan()) == 1);
            }
        }
    }
}

#[test]
fn equality_is_structural() {
    let a = Board::new(vec![vec![1, 2], vec![3, 0]]).unwrap();
    let b = Board::from_row_major(2, vec![1, 2, 3, 0]).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, Board::goal(2).unwrap());
    assert_ne!(a, Board::goal(3).unwrap());
    assert_ne!(a, a.neighbors()[0]);
}
