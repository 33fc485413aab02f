use std::cell::Cell;
use std::rc::Rc;

use chart_items::ItemResult;
use chart_items::data::{ItemEvent, ItemEventListener, MatrixChartItem};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    SetX(i32),
    SetY(i32),
    SetZ(f64),
    SetName(String),
    SlotX(i32),
    SlotY(i32),
    SlotZ(f64),
    SlotName(String),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::SetX),
        any::<i32>().prop_map(Op::SetY),
        (-1.0e9f64..1.0e9).prop_map(Op::SetZ),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Op::SetName),
        any::<i32>().prop_map(Op::SlotX),
        any::<i32>().prop_map(Op::SlotY),
        (-1.0e9f64..1.0e9).prop_map(Op::SlotZ),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Op::SlotName),
    ]
}

proptest! {
    #[test]
    fn getters_return_last_write_and_each_write_notifies_once(
        ops in proptest::collection::vec(op_strategy(), 1..48),
        duplicate_registrations in 1usize..4
    ) {
        let item = MatrixChartItem::default();
        let hits = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&hits);
        let listener: Rc<dyn ItemEventListener> =
            Rc::new(move |_: &ItemEvent| -> ItemResult<()> {
                counter.set(counter.get() + 1);
                Ok(())
            });
        for _ in 0..duplicate_registrations {
            item.add_item_event_listener(Rc::clone(&listener));
        }

        let (mut x, mut y, mut z, mut name) = (0, 0, 0.0, String::new());
        for (index, op) in ops.into_iter().enumerate() {
            match op {
                Op::SetX(v) => { item.set_x(v).expect("x"); x = v; }
                Op::SetY(v) => { item.set_y(v).expect("y"); y = v; }
                Op::SetZ(v) => { item.set_z(v).expect("z"); z = v; }
                Op::SetName(v) => { item.set_name(v.clone()).expect("name"); name = v; }
                Op::SlotX(v) => { item.x_property().set(v).expect("x slot"); x = v; }
                Op::SlotY(v) => { item.y_property().set(v).expect("y slot"); y = v; }
                Op::SlotZ(v) => { item.z_property().set(v).expect("z slot"); z = v; }
                Op::SlotName(v) => { item.name_property().set(v.clone()).expect("name slot"); name = v; }
            }
            prop_assert_eq!(hits.get(), index + 1);
            prop_assert_eq!(item.x(), x);
            prop_assert_eq!(item.y(), y);
            prop_assert_eq!(item.z(), z);
            prop_assert_eq!(item.name(), name.clone());
        }
    }
}
