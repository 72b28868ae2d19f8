//! Inventory commands: list, add, use and delete.

use chrono::NaiveDate;
use clap::Args;
use pantry_core::scanner::{CodeScanner, ScanSession, capture};
use pantry_core::{Action, ItemId, NewItem, PantryItem};

use super::{CommandError, Pantry};

/// Arguments for `pantry add`.
#[derive(Debug, Default, Args)]
pub struct AddArgs {
    /// Item name (defaults to the scanned code with --scan)
    pub name: Option<String>,

    /// Starting quantity
    #[arg(short, long, default_value_t = 1)]
    pub quantity: i64,

    /// Expiration date (YYYY-MM-DD)
    #[arg(short, long)]
    pub expires: Option<NaiveDate>,

    /// Barcode (defaults to the scanned code with --scan)
    #[arg(short, long)]
    pub barcode: Option<String>,

    /// Flag the item for restock reminders
    #[arg(short, long)]
    pub regular: bool,

    /// Read a barcode from the scanner before adding
    #[arg(short, long)]
    pub scan: bool,
}

/// One-line description of an item.
fn describe(item: &PantryItem) -> String {
    let mut parts = vec![format!("{} x{}", item.name, item.quantity)];
    if let Some(date) = item.expires_on {
        parts.push(format!("expires {date}"));
    }
    if let Some(code) = &item.barcode {
        parts.push(format!("barcode {code}"));
    }

    let mut line = parts.join(", ");
    if item.regular {
        line.push_str(" (regular)");
    }
    line
}

/// List every item in inventory order.
#[must_use]
pub fn list(pantry: &Pantry) -> Vec<String> {
    let inventory = &pantry.state().inventory;
    if inventory.is_empty() {
        return vec!["Pantry is empty.".to_owned()];
    }
    inventory
        .iter()
        .map(|item| format!("{}  {}", item.id, describe(item)))
        .collect()
}

/// Wait for one scanned code.
async fn scan_code<S: CodeScanner + Sync>(scanner: &S) -> Result<String, CommandError> {
    let mut session = ScanSession::default();
    session.start();
    tracing::info!("Scan a barcode (empty line cancels)");

    let code = capture(scanner, &mut session).await;
    code.ok_or_else(|| CommandError::Scan(session.status().unwrap_or("Scan failed.").to_owned()))
}

/// Add an item, optionally scanning its code first.
///
/// The scanner is only created when `--scan` is given.
///
/// # Errors
///
/// Returns `CommandError` if no name is available, the scan ends without a
/// code, the item is invalid or the store cannot be written.
pub async fn add<S, F>(pantry: &mut Pantry, args: AddArgs, scanner: F) -> Result<Vec<String>, CommandError>
where
    S: CodeScanner + Sync,
    F: FnOnce() -> S,
{
    let mut name = args.name;
    let mut barcode = args.barcode;

    if args.scan {
        let code = scan_code(&scanner()).await?;
        barcode.get_or_insert_with(|| code.clone());
        name.get_or_insert(code);
    }

    let item = NewItem {
        name: name.ok_or(CommandError::MissingName)?,
        quantity: args.quantity,
        expires_on: args.expires,
        barcode,
        regular: args.regular,
    }
    .into_item(ItemId::generate())?;

    let line = format!("Added {}  {}", item.id, describe(&item));
    pantry.dispatch(Action::AddItem(item))?;
    Ok(vec![line])
}

/// Use one step of an item.
///
/// # Errors
///
/// Returns `CommandError` for an unknown id or a failed write.
pub fn use_item(pantry: &mut Pantry, id: ItemId) -> Result<Vec<String>, CommandError> {
    pantry.require_item(id)?;
    pantry.dispatch(Action::UseItem(id))?;
    let item = pantry.require_item(id)?;
    Ok(vec![format!("{}: {} left", item.name, item.quantity)])
}

/// Remove an item.
///
/// # Errors
///
/// Returns `CommandError` for an unknown id or a failed write.
pub fn delete(pantry: &mut Pantry, id: ItemId) -> Result<Vec<String>, CommandError> {
    let name = pantry.require_item(id)?.name.clone();
    pantry.dispatch(Action::DeleteItem(id))?;
    Ok(vec![format!("Deleted {name}")])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pantry_core::{Catalog, Settings};
    use pantry_web::store::FileStore;

    use super::*;
    use crate::commands::testing::pantry;
    use crate::scanner::LineScanner;

    type TestScanner = LineScanner<&'static [u8]>;

    fn no_scanner() -> TestScanner {
        panic!("scanner should not be created without --scan")
    }

    fn named(name: &str) -> AddArgs {
        AddArgs {
            name: Some(name.to_owned()),
            quantity: 2,
            ..AddArgs::default()
        }
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let mut pantry = pantry();
        assert_eq!(list(&pantry), vec!["Pantry is empty.".to_owned()]);

        let mut args = named("Milk");
        args.expires = NaiveDate::from_ymd_opt(2026, 10, 20);
        args.regular = true;
        add(&mut pantry, args, no_scanner).await.unwrap();

        let lines = list(&pantry);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("Milk x2, expires 2026-10-20 (regular)"));
    }

    #[tokio::test]
    async fn test_add_with_scan_uses_code() {
        let mut pantry = pantry();
        let args = AddArgs {
            quantity: 1,
            scan: true,
            ..AddArgs::default()
        };
        add(&mut pantry, args, || LineScanner::new(&b"4006381333931\n"[..]))
            .await
            .unwrap();

        let item = &pantry.state().inventory[0];
        assert_eq!(item.name, "4006381333931");
        assert_eq!(item.barcode.as_deref(), Some("4006381333931"));
    }

    #[tokio::test]
    async fn test_cancelled_scan_adds_nothing() {
        let mut pantry = pantry();
        let args = AddArgs {
            name: Some("Milk".to_owned()),
            scan: true,
            ..AddArgs::default()
        };
        let err = add(&mut pantry, args, || LineScanner::new(&b"\n"[..]))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Scan cancelled.");
        assert!(pantry.state().inventory.is_empty());
    }

    #[tokio::test]
    async fn test_add_requires_name() {
        let mut pantry = pantry();
        let err = add(&mut pantry, AddArgs::default(), no_scanner)
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::MissingName));
    }

    #[tokio::test]
    async fn test_use_and_delete() {
        let mut pantry = pantry();
        add(&mut pantry, named("Eggs"), no_scanner).await.unwrap();
        let id = pantry.state().inventory[0].id;

        assert_eq!(use_item(&mut pantry, id).unwrap(), vec!["Eggs: 1 left"]);
        assert_eq!(use_item(&mut pantry, id).unwrap(), vec!["Eggs: 0 left"]);
        assert_eq!(use_item(&mut pantry, id).unwrap(), vec!["Eggs: 0 left"]);

        assert_eq!(delete(&mut pantry, id).unwrap(), vec!["Deleted Eggs"]);
        assert!(pantry.state().inventory.is_empty());
        assert!(matches!(
            delete(&mut pantry, id),
            Err(CommandError::UnknownItem(_))
        ));
    }

    #[tokio::test]
    async fn test_state_survives_reopening_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let open = || {
            let store = FileStore::open(dir.path()).unwrap();
            Pantry::open(Box::new(store), Catalog::builtin(), Settings::default())
        };

        let mut pantry = open();
        add(&mut pantry, named("Rice"), no_scanner).await.unwrap();
        let id = pantry.state().inventory[0].id;
        use_item(&mut pantry, id).unwrap();
        drop(pantry);

        let pantry = open();
        assert_eq!(pantry.state().inventory.len(), 1);
        assert_eq!(pantry.state().inventory[0].id, id);
        assert_eq!(pantry.state().inventory[0].quantity, 1);
    }
}
