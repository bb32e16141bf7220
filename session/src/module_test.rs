use super::*;

#[test]
fn slugs_round_trip() {
    for module in ModuleProfile::ALL {
        assert_eq!(module.to_string().parse::<ModuleProfile>(), Ok(module));
    }
}

#[test]
fn parse_is_case_insensitive_and_rejects_unknown() {
    assert_eq!(" Academic ".parse::<ModuleProfile>(), Ok(ModuleProfile::Academic));
    assert_eq!("finance".parse::<ModuleProfile>(), Err(UnknownModule("finance".to_owned())));
}

#[test]
fn routes_are_slug_scoped() {
    assert_eq!(ModuleProfile::Support.home_route(), "/support");
    assert_eq!(ModuleProfile::Support.login_route(), "/support/login");
}

#[test]
fn academic_profile_defaults_to_student() {
    let config = ModuleProfile::Academic.bootstrap_config();
    assert_eq!(config.fallback_role, "student");
    assert_eq!(config.cookie_name, "auth_data");
    assert_eq!(config.token_fields, vec!["token".to_owned(), "access_token".to_owned()]);
}

#[test]
fn strategic_profile_prefers_access_token() {
    let config = ModuleProfile::Strategic.bootstrap_config();
    assert_eq!(config.fallback_role, "guest");
    assert_eq!(config.token_fields[0], "access_token");
}
