//! Registry subtree removal action

use crate::error::Result;
use crate::host::RegistryHive;
use crate::target::RegistryNode;
use tracing::debug;

/// Delete `node` and every key beneath it, children before parents.
///
/// Each level opens its own key only long enough to list the children, so
/// no handle is open when the key itself is deleted. The first failure at
/// any depth aborts the whole call; keys already deleted stay deleted.
pub fn remove_registry_key(hive: &dyn RegistryHive, node: &RegistryNode) -> Result<()> {
    let children = hive.subkey_names(node)?;

    for name in &children {
        remove_registry_key(hive, &node.child(name))?;
    }

    hive.delete_key(node)?;
    debug!(key = %node, "deleted registry key");
    Ok(())
}

/// The keys `remove_registry_key` would delete, in deletion order, without
/// deleting anything.
pub fn plan_registry_removal(hive: &dyn RegistryHive, node: &RegistryNode) -> Result<Vec<RegistryNode>> {
    let mut order = Vec::new();
    collect_post_order(hive, node, &mut order)?;
    Ok(order)
}

fn collect_post_order(
    hive: &dyn RegistryHive,
    node: &RegistryNode,
    order: &mut Vec<RegistryNode>,
) -> Result<()> {
    for name in hive.subkey_names(node)? {
        collect_post_order(hive, &node.child(&name), order)?;
    }
    order.push(node.clone());
    Ok(())
}
