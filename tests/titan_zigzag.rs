use titan_numerics::core::titan::reorder::{zigzag, zigzag_from_str, Axis, Corner};

#[test]
fn bottom_right_horizontal_4() {
    let z = zigzag(4, Corner::BottomRight, Axis::Horizontal).unwrap();
    insta::assert_snapshot!(z.to_string(), @r"
    16 15 11 10
    14 12 9 4
    13 8 5 3
    7 6 2 1
    ");
}

#[test]
fn top_left_horizontal_4() {
    let z = zigzag_from_str(4, "TL", "H").unwrap();
    insta::assert_snapshot!(z.to_string(), @r"
    1 2 6 7
    3 5 8 13
    4 9 12 14
    10 11 15 16
    ");
}

#[test]
fn top_left_vertical_is_transpose_of_horizontal() {
    let h = zigzag(5, Corner::TopLeft, Axis::Horizontal).unwrap();
    let v = zigzag(5, Corner::TopLeft, Axis::Vertical).unwrap();
    assert_eq!(v, h.transpose());
}

#[test]
fn consecutive_values_are_neighbours() {
    for corner in ["TL", "TR", "BL", "BR"] {
        for axis in ["H", "V"] {
            let z = zigzag_from_str(6, corner, axis).unwrap();
            let mut at = vec![(0usize, 0usize); 37];
            for (i, row) in z.iter_rows().enumerate() {
                for (j, v) in row.iter().enumerate() {
                    at[*v as usize] = (i, j);
                }
            }
            for k in 1..36 {
                let (a, b) = (at[k], at[k + 1]);
                let di = a.0.abs_diff(b.0);
                let dj = a.1.abs_diff(b.1);
                assert!(di <= 1 && dj <= 1, "{corner}/{axis}: {k} -> {}", k + 1);
            }
        }
    }
}
