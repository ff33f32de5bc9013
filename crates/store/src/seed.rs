//! Demo items loaded at startup when seeding is enabled.

use crate::models::item::Item;

/// Tenant the demo items are assigned to unless configured otherwise.
pub const DEFAULT_SEED_TENANT: &str = "defaultTenant";

/// The three demo items, ids 1 through 3, owned by `tenant_id`.
pub fn demo_items(tenant_id: &str) -> Vec<Item> {
    let item = |id, name: &str, memo: &str, is_completed| Item {
        id,
        tenant_id: tenant_id.to_string(),
        name: name.to_string(),
        memo: Some(memo.to_string()),
        image_url: None,
        is_completed,
    };

    vec![
        item(1, "Learn Next.js", "Finish the official tutorial", false),
        item(2, "Build a todo app", "Apply what I learned", true),
        item(3, "Project brainstorming", "Come up with new ideas", false),
    ]
}
