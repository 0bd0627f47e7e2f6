use order_desk::desk_actor::{DeskOutcome, IgnoreReason, KeyPress};
use order_desk::lifecycle::{DeskConfig, DeskSystem};
use order_desk::model::{ItemKey, LineId};

fn beer() -> ItemKey {
    ItemKey::new("Beer", "Beer")
}

fn cola() -> ItemKey {
    ItemKey::new("Cola", "Refreshments")
}

/// Full end-to-end test through the real actor: two lines, then the total.
#[tokio::test]
async fn test_full_order_flow() {
    let system = DeskSystem::new(&DeskConfig::default());
    let desk = &system.desk_client;

    // Customer name, committed with Enter
    desk.update_name_draft("  Alice  ").await.unwrap();
    let outcome = desk.press_name_key(KeyPress::Enter).await.unwrap();
    assert_eq!(outcome, DeskOutcome::NameCommitted("Alice".into()));

    // Beer x3
    desk.select_item(Some(beer())).await.unwrap();
    desk.set_quantity("3").await.unwrap();
    let beer_line = desk.add_to_order().await.unwrap();
    assert!(matches!(beer_line, DeskOutcome::LineAdded(_)));

    // Cola x1
    desk.select_item(Some(cola())).await.unwrap();
    desk.set_quantity("1").await.unwrap();
    desk.add_to_order().await.unwrap();

    let view = desk.view().await.unwrap();
    assert_eq!(view.customer.as_deref(), Some("Alice"));
    assert_eq!(view.name_draft, "");
    assert!(!view.add_enabled, "selection resets after add");
    assert_eq!(view.quantity, 1);

    let order = view.order.expect("order section should be shown");
    let lines: Vec<(&str, &str, &str)> = order
        .lines
        .iter()
        .map(|l| (l.name.as_str(), l.detail.as_str(), l.subtotal.as_str()))
        .collect();
    assert_eq!(
        lines,
        vec![("Beer", "3 x $2.00", "$6.00"), ("Cola", "1 x $1.75", "$1.75")]
    );
    assert_eq!(order.total, "$7.75");

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Adding then removing the only line hides the order section again.
#[tokio::test]
async fn test_remove_only_line_hides_order() {
    let system = DeskSystem::new(&DeskConfig::default());
    let desk = &system.desk_client;

    desk.select_item(Some(beer())).await.unwrap();
    desk.set_quantity("2").await.unwrap();
    let DeskOutcome::LineAdded(id) = desk.add_to_order().await.unwrap() else {
        panic!("expected a line to be added");
    };

    let view = desk.view().await.unwrap();
    assert_eq!(view.order.as_ref().unwrap().lines[0].subtotal, "$4.00");

    assert_eq!(desk.remove_line(id).await.unwrap(), DeskOutcome::LineRemoved(id));
    // Removing again is a no-op
    assert_eq!(
        desk.remove_line(id).await.unwrap(),
        DeskOutcome::Ignored(IgnoreReason::UnknownLine(id))
    );

    let view = desk.view().await.unwrap();
    assert!(view.order.is_none());
    assert!(!view.to_string().contains("Order Items"));

    system.shutdown().await.unwrap();
}

/// Blank names and bad quantities are corrected, never reported as errors.
#[tokio::test]
async fn test_bad_input_is_normalized() {
    let system = DeskSystem::new(&DeskConfig::default());
    let desk = &system.desk_client;

    desk.update_name_draft("Bob").await.unwrap();
    desk.confirm_name().await.unwrap();
    desk.update_name_draft("   ").await.unwrap();
    assert_eq!(
        desk.confirm_name().await.unwrap(),
        DeskOutcome::Ignored(IgnoreReason::BlankName)
    );

    assert_eq!(
        desk.add_to_order().await.unwrap(),
        DeskOutcome::Ignored(IgnoreReason::NoSelection)
    );
    assert_eq!(
        desk.remove_line(LineId(99)).await.unwrap(),
        DeskOutcome::Ignored(IgnoreReason::UnknownLine(LineId(99)))
    );

    desk.select_item(Some(cola())).await.unwrap();
    desk.set_quantity("-5").await.unwrap();
    let view = desk.view().await.unwrap();
    assert_eq!(view.customer.as_deref(), Some("Bob"));
    assert_eq!(view.name_draft, "   ");
    assert_eq!(view.quantity, 1);
    assert!(view.add_enabled);

    system.shutdown().await.unwrap();
}

/// Many callers sharing one client still see every add applied exactly once.
#[tokio::test]
async fn test_concurrent_adds_get_unique_lines() {
    let system = DeskSystem::new(&DeskConfig::default());

    let mut handles = vec![];
    for _ in 0..10 {
        let desk = system.desk_client.clone();
        handles.push(tokio::spawn(async move {
            desk.select_item(Some(ItemKey::new("Beer", "Beer"))).await?;
            desk.add_to_order().await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        if let DeskOutcome::LineAdded(id) = handle.await.unwrap().unwrap() {
            ids.push(id);
        }
    }

    let view = system.desk_client.view().await.unwrap();
    let lines = view.order.map(|o| o.lines.len()).unwrap_or(0);
    assert_eq!(lines, ids.len());
    ids.sort_by_key(|id| id.0);
    ids.dedup();
    assert_eq!(ids.len(), lines, "line ids must be unique");

    system.shutdown().await.unwrap();
}

/// A menu from config drives the selector.
#[tokio::test]
async fn test_custom_menu_from_config() {
    let config = DeskConfig::from_json(
        r#"{ "menu": [
            { "name": "Tea", "category": "Hot", "price": "1.20" },
            { "name": "Bagel", "category": "Food", "price": "2.5" },
            { "name": "Coffee", "category": "Hot", "price": "1.80" }
        ] }"#,
    )
    .unwrap();
    let system = DeskSystem::new(&config);

    let view = system.desk_client.view().await.unwrap();
    let groups: Vec<(&str, Vec<&str>)> = view
        .selector
        .iter()
        .map(|g| (g.label.as_str(), g.options.iter().map(|o| o.label.as_str()).collect()))
        .collect();
    assert_eq!(
        groups,
        vec![
            ("Food", vec!["Bagel - $2.50"]),
            ("Hot", vec!["Tea - $1.20", "Coffee - $1.80"]),
        ]
    );

    system.shutdown().await.unwrap();
}
