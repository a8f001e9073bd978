//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todoprov_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use todoprov_core::{Authority, TodoContract, WildcardStyle};

const DEMO_AUTHORITY: &str = "content://org.positronicnet.sample.todo_cp";

fn main() {
    let authority = match Authority::new(DEMO_AUTHORITY) {
        Ok(authority) => authority,
        Err(err) => {
            eprintln!("invalid demo authority: {err}");
            std::process::exit(1);
        }
    };

    let contract = TodoContract::new(authority);
    println!("todoprov_core version={}", todoprov_core::core_version());
    println!("lists={}", contract.lists_uri());
    println!("list={}", contract.list_uri(1));
    println!("items={}", contract.list_items_uri(1));
    println!("item={}", contract.list_item_uri(1, 2));
    println!(
        "item_pattern={}",
        contract.list_item_pattern().render(WildcardStyle::Equals)
    );
    println!(
        "lists_type={}",
        todoprov_core::dir_content_type(todoprov_core::TODO_LIST_KIND)
    );
}
