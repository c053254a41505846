//! Zustand store module

use super::render;
use crate::request::Script;

const STORE_TS: &str = include_str!("../../assets/unit/store.ts.tmpl");
const STORE_JS: &str = include_str!("../../assets/unit/store.js.tmpl");

/// Store module exporting `use{Name}Store`
pub fn store(name: &str, script: Script) -> String {
    let template = match script {
        Script::TypeScript => STORE_TS,
        Script::JavaScript => STORE_JS,
    };
    render(template, &[("__NAME__", name)])
}

/// Name of the hook exported by the store module
pub fn store_hook(name: &str) -> String {
    format!("use{}Store", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIONS: [&str; 5] = ["increment:", "decrement:", "updateText:", "setLoading:", "reset:"];

    #[test]
    fn test_store_exports_hook_and_actions() {
        for script in [Script::JavaScript, Script::TypeScript] {
            let src = store("Cart", script);
            assert!(src.contains("export const useCartStore = create"));
            for action in ACTIONS {
                assert!(src.contains(action), "{} missing {}", script, action);
            }
            assert!(!src.contains("__NAME__"));
        }
    }

    #[test]
    fn test_store_initial_state_and_reset() {
        let src = store("Cart", Script::JavaScript);
        assert!(src.contains("const initialState = {\n  count: 0,\n  text: '',\n  isLoading: false,\n};"));
        assert!(src.contains("reset: () => set(initialState),"));
        // increment and decrement are symmetric on count
        assert!(src.contains("count: state.count + 1"));
        assert!(src.contains("count: state.count - 1"));
    }

    #[test]
    fn test_typed_store_declares_state_interface() {
        let src = store("Cart", Script::TypeScript);
        assert!(src.contains("interface CartState {"));
        assert!(src.contains("create<CartState>()"));

        let untyped = store("Cart", Script::JavaScript);
        assert!(!untyped.contains("interface"));
    }

    #[test]
    fn test_store_hook_name() {
        assert_eq!(store_hook("User"), "useUserStore");
    }
}
