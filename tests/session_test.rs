use order_desk::lifecycle::DeskConfig;
use order_desk::terminal::{run_session, SessionOptions};

/// Runs a scripted session against a real Desk actor and returns the screen output.
async fn run_script(script: &str) -> String {
    let config = DeskConfig::default();
    let (desk_actor, desk_client) = order_desk::desk_actor::new(config.buffer_size, config.catalog());
    let actor_handle = tokio::spawn(desk_actor.run(()));

    let mut output: Vec<u8> = Vec::new();
    let options = SessionOptions { clear_screen: false };
    run_session(&desk_client, script.as_bytes(), &mut output, options)
        .await
        .expect("session failed");

    drop(desk_client);
    actor_handle.await.unwrap();
    String::from_utf8(output).unwrap()
}

/// The last screen drawn, i.e. everything after the final title line.
fn last_screen(output: &str) -> &str {
    let start = output.rfind("Order Management").expect("no screen drawn");
    &output[start..]
}

#[tokio::test]
async fn test_scripted_order() {
    let script = "\
name   Alice
enter
select 1
qty 3
add
select 2
add
quit
";
    let output = run_script(script).await;
    let screen = last_screen(&output);

    assert!(screen.contains("Customer: Alice"));
    assert!(screen.contains("Select Item: Choose an item..."));
    assert!(screen.contains("3 x $2.00"));
    assert!(screen.contains("1 x $1.75"));
    assert!(screen.contains("$7.75"));
}

#[tokio::test]
async fn test_add_is_refused_while_nothing_selected() {
    let output = run_script("add\n").await;
    let screen = last_screen(&output);

    assert!(screen.contains("Add to Order is disabled until an item is selected"));
    assert!(!screen.contains("Order Items"));
}

#[tokio::test]
async fn test_remove_by_displayed_position() {
    let script = "\
select 1
add
select 2
add
remove 1
remove 5
";
    let output = run_script(script).await;
    let screen = last_screen(&output);

    assert!(!screen.contains("1 x $2.00"), "the Beer line should be gone:\n{screen}");
    assert!(screen.contains("1 x $1.75"));
    assert!(screen.contains("There is no order line 5"));
    assert!(screen.contains("Total"));
}

#[tokio::test]
async fn test_unknown_command_and_bad_option() {
    let output = run_script("dance\nselect 9\n").await;

    assert!(output.contains("Unknown command \"dance\""));
    assert!(output.contains("There is no item 9"));
}

#[tokio::test]
async fn test_json_dump_of_view() {
    let output = run_script("select 2\nqty 4\njson\n").await;

    assert!(output.contains("\"add_enabled\": true"));
    assert!(output.contains("\"quantity\": 4"));
    assert!(output.contains("\"order\": null"));
}

#[tokio::test]
async fn test_quantity_typed_before_selecting() {
    let output = run_script("qty 3\nselect 1\nadd\n").await;
    let screen = last_screen(&output);

    assert!(screen.contains("3 x $2.00"), "staged quantity should be used:\n{screen}");
    assert!(screen.contains("$6.00"));
}

#[tokio::test]
async fn test_huge_quantity_is_capped() {
    let output = run_script("select 1\nqty 1000000000\nadd\nshow\n").await;
    let screen = last_screen(&output);

    assert!(screen.contains("9999 x $2.00"), "quantity should clamp:\n{screen}");
    assert!(screen.contains("$19998.00"));
}
