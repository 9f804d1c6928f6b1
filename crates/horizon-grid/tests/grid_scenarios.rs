//! End-to-end scenarios driving the grid the way a host toolkit would.

use std::cell::Cell;
use std::rc::Rc;

use chrono::NaiveDate;
use horizon_grid::prelude::*;

#[derive(Debug, Clone)]
struct Account {
    owner: String,
    pin: String,
    tier: Option<String>,
    opened: Option<NaiveDate>,
    active: bool,
    balance: i64,
}

impl Account {
    fn new(owner: &str, balance: i64) -> Self {
        Self {
            owner: owner.to_owned(),
            pin: "1234".to_owned(),
            tier: Some("basic".to_owned()),
            opened: NaiveDate::from_ymd_opt(2024, 3, 1),
            active: true,
            balance,
        }
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn accounts(n: usize) -> Vec<Record<Account>> {
    (0..n)
        .map(|i| Record::new(Account::new(&format!("owner {i}"), i as i64 * 100)))
        .collect()
}

/// A grid using every column kind.
fn account_grid(config: GridConfig) -> EditableGrid<Account> {
    let mut grid = EditableGrid::with_config(config);
    grid.append_column_text(
        "owner",
        "Owner",
        |a: &Account| a.owner.clone(),
        |a, v| a.owner = v.to_owned(),
    );
    grid.append_column_password("pin", "PIN", |a: &Account| a.pin.clone(), |a, v| {
        a.pin = v.to_owned()
    });
    grid.append_column_choice(
        "tier",
        "Tier",
        ["basic", "gold", "platinum"],
        |a: &Account| a.tier.clone(),
        |a, v| a.tier = v.map(str::to_owned),
    );
    grid.append_column_date("opened", "Opened", |a: &Account| a.opened, |a, v| a.opened = v);
    grid.append_column_checkbox("active", "Active", |a: &Account| a.active, |a, v| a.active = v);
    grid.append_column_label("balance", "Balance", |a: &Account| {
        format!("{:.2}", a.balance as f64 / 100.0)
    });
    grid.append_column_button("close", "", "Close", |r: &Record<Account>| {
        r.write().active = false;
    });
    grid
}

#[test]
fn test_every_column_kind_is_filled_from_the_record() {
    init_logging();
    let mut grid = account_grid(GridConfig::default());
    let records = accounts(2);
    grid.append_rows(records.clone());
    grid.tick();

    let second = &records[1];
    assert_eq!(grid.control::<TextField>(second, "owner").unwrap().text(), "owner 1");
    let pin = grid.control::<PasswordField>(second, "pin").unwrap();
    assert_eq!(pin.text(), "1234");
    assert_eq!(pin.displayed_text().chars().count(), 4);
    assert_eq!(
        grid.control::<ChoiceBox>(second, "tier").unwrap().selected_item(),
        Some("basic")
    );
    let opened = grid.control::<DatePicker>(second, "opened").unwrap();
    assert_eq!(opened.display_text(), "2024-03-01");
    assert!(grid.control::<CheckBox>(second, "active").unwrap().is_checked());
    assert_eq!(grid.control::<Label>(second, "balance").unwrap().text(), "1.00");
    assert_eq!(grid.control::<Button>(second, "close").unwrap().text(), "Close");

    assert_eq!(
        grid.headers(),
        vec!["Owner", "PIN", "Tier", "Opened", "Active", "Balance", ""]
    );
}

#[test]
fn test_edits_flow_back_into_the_record() {
    init_logging();
    let mut grid = account_grid(GridConfig::default());
    let records = accounts(1);
    grid.append_rows(records.clone());
    grid.tick();
    let account = &records[0];

    grid.edit_control::<ChoiceBox, _>(account, "tier", |c| c.select_item("gold"))
        .unwrap();
    grid.edit_control::<DatePicker, _>(account, "opened", |d| d.set_text("2025-01-15"))
        .unwrap()
        .unwrap();
    grid.edit_control::<PasswordField, _>(account, "pin", |p| p.set_text("9876"))
        .unwrap();

    let value = account.read().clone();
    assert_eq!(value.tier.as_deref(), Some("gold"));
    assert_eq!(value.opened, NaiveDate::from_ymd_opt(2025, 1, 15));
    assert_eq!(value.pin, "9876");

    // Labels never write back.
    grid.edit_control::<Label, _>(account, "balance", |l| l.set_text("bogus"))
        .unwrap();
    assert_eq!(account.read().balance, 0);
}

#[test]
fn test_choice_outside_items_is_reported_on_refresh() {
    let mut grid = account_grid(GridConfig::default());
    let records = accounts(1);
    grid.append_rows(records.clone());
    grid.tick();
    let account = &records[0];

    account.write().tier = Some("diamond".to_owned());
    grid.update_row(account).unwrap();
    let tier = grid.control::<ChoiceBox>(account, "tier").unwrap();
    assert_eq!(tier.selected_item(), Some("basic"));

    account.write().tier = None;
    grid.update_row(account).unwrap();
    assert_eq!(grid.control::<ChoiceBox>(account, "tier").unwrap().selected_item(), None);
}

#[test]
fn test_button_action_sees_the_clicked_record() {
    let mut grid = account_grid(GridConfig::default());
    let records = accounts(3);
    grid.append_rows(records.clone());
    grid.tick();

    assert!(grid.click_button(&records[1], "close").unwrap());
    assert!(!records[1].read().active);
    assert!(records[0].read().active);
    assert_eq!(grid.selected_item(), Some(records[1].clone()));

    grid.update_row(&records[1]).unwrap();
    assert!(!grid.control::<CheckBox>(&records[1], "active").unwrap().is_checked());
}

#[test]
fn test_keyboard_walk_through_batches_to_the_edge() {
    init_logging();
    let config = GridConfig::default().with_load_rows_count(4);
    let mut grid = account_grid(config).with_viewport(RowViewport::new(2));
    let records = accounts(10);
    grid.append_rows(records.clone());
    grid.tick();
    assert_eq!(grid.visible_row_count(), 4);

    let blocked = Rc::new(Cell::new(0));
    let seen = blocked.clone();
    grid.set_cant_move_down_at_last_row_callback(move |_| seen.set(seen.get() + 1));

    let owner = grid.control::<TextField>(&records[0], "owner").unwrap().base().id();
    assert!(grid.request_focus(owner));

    for _ in 0..12 {
        let mut event = KeyPressEvent::new(Key::ArrowDown, KeyboardModifiers::CTRL);
        assert!(grid.handle_key_press(&mut event));
    }

    let last = &records[9];
    assert_eq!(grid.selected_item(), Some(last.clone()));
    assert_eq!(grid.visible_row_count(), 10);
    assert_eq!(blocked.get(), 3);

    let focused = grid.focused_control().and_then(|id| grid.control_by_id(id));
    assert_eq!(focused.map(Control::column_id), Some("owner"));
    assert_eq!(
        focused.map(Control::id),
        Some(grid.control::<TextField>(last, "owner").unwrap().base().id())
    );
}

#[test]
fn test_selection_observers() {
    let mut grid = account_grid(GridConfig::default());
    let records = accounts(3);

    let owners = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
    let sink = owners.clone();
    grid.selected_item_changed().connect(move |record: &Option<Record<Account>>| {
        if let Some(record) = record {
            sink.lock().push(record.read().owner.clone());
        }
    });

    grid.append_rows(records.clone());
    grid.tick();
    grid.handle_row_click(&records[2], MouseButton::Left);
    grid.remove_row(&records[2]);

    assert_eq!(*owners.lock(), vec!["owner 0", "owner 2", "owner 1"]);
}

#[test]
fn test_config_file_drives_the_grid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.toml");
    std::fs::write(
        &path,
        r#"
        load_rows_count = 3
        initial_load_deferred = false

        [navigation_modifiers]
        alt = true
        "#,
    )
    .unwrap();

    let config = GridConfig::load(&path).unwrap();
    let mut grid = account_grid(config);
    let records = accounts(5);
    grid.append_rows(records.clone());
    assert_eq!(grid.visible_row_count(), 3);

    let mut ctrl_down = KeyPressEvent::new(Key::ArrowDown, KeyboardModifiers::CTRL);
    assert!(!grid.handle_key_press(&mut ctrl_down));
    let mut alt_down = KeyPressEvent::new(Key::ArrowDown, KeyboardModifiers::ALT);
    assert!(grid.handle_key_press(&mut alt_down));
    assert_eq!(grid.selected_item(), Some(records[1].clone()));
}

#[test]
fn test_invalid_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.toml");
    std::fs::write(&path, "load_rows_count = 0").unwrap();

    let err: GridError = GridConfig::load(&path).unwrap_err().into();
    assert!(matches!(err, GridError::Config(_)));
    assert!(GridConfig::load(dir.path().join("missing.toml")).is_err());
}
