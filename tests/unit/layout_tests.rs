use toolkit::layout::{DisplayMode, grid};

#[test]
fn grid_covers_every_result_once() {
    for mode in [DisplayMode::Phone, DisplayMode::Tablet, DisplayMode::Desktop] {
        for count in 0..20 {
            let rows = grid(count, mode);
            assert_eq!(rows.len(), count.div_ceil(mode.columns()), "{mode} {count}");

            let flat: Vec<usize> = rows.iter().flatten().copied().collect();
            assert_eq!(flat, (0..count).collect::<Vec<_>>());
            assert!(rows.iter().all(|row| row.len() <= mode.columns()));
        }
    }
}

#[test]
fn display_mode_round_trips_through_text() {
    for mode in [DisplayMode::Phone, DisplayMode::Tablet, DisplayMode::Desktop] {
        assert_eq!(mode.to_string().parse::<DisplayMode>().unwrap(), mode);
    }
}
