include!("../../includes/check_deps_documented.rs");
