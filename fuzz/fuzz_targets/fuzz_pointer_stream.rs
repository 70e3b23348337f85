#![no_main]

use arbitrary::Arbitrary;
use dragboard_host::{BoardPreset, BoardView, HostConfig, PointerEvent, PointerEventKind, Rect};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Kind {
    Down,
    Move,
    Up,
    Leave,
    Cancel,
}

#[derive(Debug, Arbitrary)]
struct Input {
    preset: u8,
    threshold: u8,
    width: u8,
    events: Vec<(Kind, u8, u8)>,
}

fuzz_target!(|input: Input| {
    let preset = BoardPreset::all()[usize::from(input.preset) % 4];
    let board = preset.board().expect("fixture parses");
    let count = board.item_count();
    let config = HostConfig::default()
        .with_drag_threshold(u16::from(input.threshold % 6))
        .with_column_width(u16::from(input.width % 40).max(1));
    let mut view = BoardView::new(board, config).with_area(Rect::from_size(200, 60));

    for (kind, x, y) in input.events.into_iter().take(512) {
        let kind = match kind {
            Kind::Down => PointerEventKind::Down,
            Kind::Move => PointerEventKind::Move,
            Kind::Up => PointerEventKind::Up,
            Kind::Leave => PointerEventKind::Leave,
            Kind::Cancel => PointerEventKind::Cancel,
        };
        let _ = view.handle_pointer(PointerEvent::new(kind, u16::from(x), u16::from(y)));
        assert_eq!(view.board().item_count(), count);
    }
    assert!(view.board().check_invariants().is_ok());
});
