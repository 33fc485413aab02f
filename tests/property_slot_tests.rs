use std::cell::RefCell;
use std::rc::Rc;

use chart_items::core::{Property, ValueListener};

#[test]
fn free_standing_slot_notifies_value_listeners() {
    let slot = Property::new(String::from("a"));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let listener: Rc<ValueListener<String>> =
        Rc::new(move |value: &String| sink.borrow_mut().push(value.clone()));

    assert!(slot.add_listener(Rc::clone(&listener)));
    assert!(!slot.add_listener(Rc::clone(&listener)));
    assert_eq!(slot.listener_count(), 1);

    slot.set("b".to_owned()).expect("set");
    slot.set("b".to_owned()).expect("set equal");
    assert_eq!(*seen.borrow(), vec!["b".to_owned(), "b".to_owned()]);

    assert!(slot.remove_listener(&listener));
    slot.set("c".to_owned()).expect("set");
    assert_eq!(seen.borrow().len(), 2);
    assert_eq!(slot.get(), "c");
}

#[test]
fn clones_share_the_same_slot() {
    let slot = Property::new(1_i32);
    let alias = slot.clone();
    let other = Property::new(1_i32);

    alias.set(2).expect("set through alias");
    assert_eq!(slot.get(), 2);
    assert!(Property::ptr_eq(&slot, &alias));
    assert!(!Property::ptr_eq(&slot, &other));
}

#[test]
fn item_slot_value_listeners_fire_after_item_listeners() {
    use chart_items::data::{ItemEvent, ItemEventListener, MatrixChartItem};
    use chart_items::ItemResult;

    let item = MatrixChartItem::default();
    let order = Rc::new(RefCell::new(Vec::new()));

    let item_order = Rc::clone(&order);
    let item_listener: Rc<dyn ItemEventListener> =
        Rc::new(move |_: &ItemEvent| -> ItemResult<()> {
            item_order.borrow_mut().push("item");
            Ok(())
        });
    item.add_item_event_listener(item_listener);

    let slot = item.z_property();
    let slot_order = Rc::clone(&order);
    slot.add_listener(Rc::new(move |_: &f64| slot_order.borrow_mut().push("slot")));

    slot.set(2.0).expect("slot set");
    item.set_z(3.0).expect("setter routes through slot");
    assert_eq!(*order.borrow(), vec!["item", "slot", "item", "slot"]);
}
