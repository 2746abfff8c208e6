use halo_core::{Axis, Element, Grid, GridError};

fn ramp<T: Element>(values: [T; 6]) -> Grid<T> {
    Grid::new(2, 3, values.to_vec()).unwrap()
}

#[test]
fn every_numeric_width_round_trips_through_blocks() {
    fn check<T: Element>(values: [T; 6]) {
        let g = ramp(values);
        let mut out = Grid::<T>::zeros(2, 3).unwrap();
        for c in 0..3 {
            out.write_block(Axis::Col, c, &g.block(Axis::Col, c..c + 1));
        }
        assert_eq!(out, g);
    }

    check([1u8, 2, 3, 4, 5, u8::MAX]);
    check([1u16, 2, 3, 4, 5, u16::MAX]);
    check([1u32, 2, 3, 4, 5, u32::MAX]);
    check([1u64, 2, 3, 4, 5, u64::MAX]);
    check([1u128, 2, 3, 4, 5, u128::MAX]);
    check([i8::MIN, -1, 0, 1, 2, i8::MAX]);
    check([i16::MIN, -1, 0, 1, 2, i16::MAX]);
    check([i32::MIN, -1, 0, 1, 2, i32::MAX]);
    check([i64::MIN, -1, 0, 1, 2, i64::MAX]);
    check([f32::MIN, -0.5, 0.0, 0.25, 1e-38, f32::MAX]);
    check([f64::MIN, -0.5, 0.0, 0.25, 1e-300, f64::MAX]);
}

#[test]
fn grids_are_send_and_sync() {
    fn assert_send_sync<S: Send + Sync>() {}
    assert_send_sync::<Grid<u16>>();
    assert_send_sync::<Grid<f64>>();
    assert_send_sync::<GridError>();
}
