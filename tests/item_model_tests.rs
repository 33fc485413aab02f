use std::cell::Cell;
use std::rc::Rc;

use chart_items::ItemResult;
use chart_items::data::{
    ChartItemModel, ChartModelEvent, ChartModelListener, ItemEvent, ItemEventListener,
    MatrixChartItem,
};

#[test]
fn refresh_and_item_events_are_independent() {
    let items: Vec<MatrixChartItem> = (0..20)
        .map(|i| MatrixChartItem::with_name(i, 0, 0.0, format!("P{i}")))
        .collect();
    let mut model = ChartItemModel::new(items);
    model.add_item(MatrixChartItem::default());
    assert_eq!(model.len(), 21);

    let refreshes = Rc::new(Cell::new(0));
    let refresh_counter = Rc::clone(&refreshes);
    let model_listener: Rc<dyn ChartModelListener> =
        Rc::new(move |event: ChartModelEvent| -> ItemResult<()> {
            assert_eq!(event, ChartModelEvent::Refresh);
            refresh_counter.set(refresh_counter.get() + 1);
            Ok(())
        });
    assert!(model.add_model_listener(Rc::clone(&model_listener)));
    assert!(!model.add_model_listener(Rc::clone(&model_listener)));

    let item_events = Rc::new(Cell::new(0));
    let item_counter = Rc::clone(&item_events);
    let item_listener: Rc<dyn ItemEventListener> =
        Rc::new(move |_: &ItemEvent| -> ItemResult<()> {
            item_counter.set(item_counter.get() + 1);
            Ok(())
        });
    for item in model.items() {
        item.add_item_event_listener(Rc::clone(&item_listener));
    }

    for item in model.items() {
        item.set_y(item.x() * 2).expect("set y");
    }
    assert_eq!(item_events.get(), 21);
    assert_eq!(refreshes.get(), 0);

    model.refresh().expect("refresh");
    assert_eq!(refreshes.get(), 1);
    assert_eq!(item_events.get(), 21);

    assert!(model.remove_model_listener(&model_listener));
    model.refresh().expect("refresh without listeners");
    assert_eq!(refreshes.get(), 1);
}
