use anyhow::Context;
use baleen_core::errors::CoreError;
use baleen_core::menu::{self, MenuEntry};
use baleen_core::responses::{MenuListResponse, MenuParentsResponse, MenuResolveResponse};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MenuCommands;
use crate::output::{Table, output_with_tables};

/// Handle `baleen-admin menu <action>` against the built-in menu.
pub fn handle(action: &MenuCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tree = menu::menu_items();
    menu::validate_menu(tree).context("built-in menu is malformed")?;

    match action {
        MenuCommands::List => output_with_tables(&list(tree), flags.format, list_tables),
        MenuCommands::Parents { key } => {
            output_with_tables(&parents(tree, key)?, flags.format, parents_tables)
        }
        MenuCommands::Resolve { path } => {
            output_with_tables(&resolve(tree, path)?, flags.format, resolve_tables)
        }
    }
}

fn list(tree: &[MenuEntry]) -> MenuListResponse {
    MenuListResponse {
        items: menu::flatten(tree),
    }
}

fn parents(tree: &[MenuEntry], key: &str) -> Result<MenuParentsResponse, CoreError> {
    let entry = menu::find_menu_item(tree, key).ok_or_else(|| CoreError::NotFound {
        kind: "menu item".to_string(),
        key: key.to_string(),
    })?;

    Ok(MenuParentsResponse {
        key: entry.key.clone(),
        parents: menu::find_all_parents(tree, entry),
    })
}

fn resolve(tree: &[MenuEntry], path: &str) -> Result<MenuResolveResponse, CoreError> {
    let active = menu::resolve_active(tree, path).ok_or_else(|| CoreError::NotFound {
        kind: "route".to_string(),
        key: path.to_string(),
    })?;

    Ok(MenuResolveResponse {
        path: path.to_string(),
        active,
    })
}

fn list_tables(response: &MenuListResponse) -> Vec<Table> {
    let mut table = Table::new(["key", "label", "url", "parent"]);
    for row in &response.items {
        let label = if row.is_title {
            row.label.to_uppercase()
        } else {
            row.label.clone()
        };
        table.push_row([
            row.key.clone(),
            format!("{}{label}", "  ".repeat(row.depth)),
            row.url.clone().unwrap_or_else(|| String::from("-")),
            row.parent_key.clone().unwrap_or_else(|| String::from("-")),
        ]);
    }
    vec![table]
}

fn parents_tables(response: &MenuParentsResponse) -> Vec<Table> {
    let mut table = Table::new(["level", "key"]).with_title(response.key.clone());
    for (level, key) in response.parents.iter().enumerate() {
        table.push_row([(level + 1).to_string(), key.clone()]);
    }
    vec![table]
}

fn resolve_tables(response: &MenuResolveResponse) -> Vec<Table> {
    let active = &response.active;
    let mut table = Table::new(["key", "value"]).with_title(response.path.clone());
    table.push_row(["active", active.key.as_str()]);
    table.push_row(["url", active.url.as_str()]);
    table.push_row(["expanded".to_string(), active.expanded.join(", ")]);
    vec![table]
}
