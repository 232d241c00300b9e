use crate::constants::VENDOR_MARKER;

/// Returns true when `module_name` should be left out of the graph.
///
/// Matching is a plain substring check, so `src/node_modules_shim.ts` is excluded too.
pub fn should_exclude(module_name: &str, exclude_node_modules: bool) -> bool {
    exclude_node_modules && module_name.contains(VENDOR_MARKER)
}
