mod support;

use plugboard_core::{optional, plain, singleton, value, ExtensionPoint, ResolveError, Value};
use support::Container;

fn string_provider(text: &'static str) -> impl Fn(&[Vec<Value>]) -> Result<Value, ResolveError> {
    move |_groups| Ok(value(text.to_string()))
}

#[test]
fn plain_preserves_provider_count_and_installation_order() {
    let mut container = Container::new();
    let themes = plain("themes");

    container.install(themes.resolver());
    container.install(themes.provider(vec![], string_provider("dark")));
    container.install(themes.provider(vec![], string_provider("light")));
    container.install(themes.provider(vec![], string_provider("sepia")));

    let resolved = container
        .resolve(themes.resolve_identity())
        .expect("plain resolution never fails");
    assert_eq!(resolved.len(), 1);

    let sequence = resolved[0]
        .downcast_ref::<Vec<Value>>()
        .expect("plain yields the sequence")
        .clone();
    let names: Vec<&str> = sequence
        .iter()
        .map(|item| item.downcast_ref::<String>().expect("string").as_str())
        .collect();
    assert_eq!(names, ["dark", "light", "sepia"]);
}

#[test]
fn plain_with_zero_providers_yields_an_empty_sequence() {
    let mut container = Container::new();
    let themes = plain("themes");
    container.install(themes.resolver());

    let resolved = container
        .resolve(themes.resolve_identity())
        .expect("plain resolution never fails");
    let sequence = resolved[0]
        .downcast_ref::<Vec<Value>>()
        .expect("plain yields the sequence");
    assert!(sequence.is_empty());
}

#[test]
fn optional_with_zero_providers_yields_an_empty_carrier() {
    let mut container = Container::new();
    let settings = optional("settings");
    container.install(settings.resolver());

    let resolved = container
        .resolve(settings.resolve_identity())
        .expect("zero providers are allowed");
    let carrier = resolved[0]
        .downcast_ref::<Option<Value>>()
        .expect("optional yields a carrier");
    assert!(carrier.is_none());
}

#[test]
fn optional_with_one_provider_yields_that_value() {
    let mut container = Container::new();
    let settings = optional("settings");
    container.install(settings.resolver());
    container.install(settings.provider(vec![], string_provider("defaults")));

    let resolved = container
        .resolve(settings.resolve_identity())
        .expect("one provider is allowed");
    let carrier = resolved[0]
        .downcast_ref::<Option<Value>>()
        .expect("optional yields a carrier")
        .clone();
    let single = carrier.expect("carrier holds the value");
    assert_eq!(
        single.downcast_ref::<String>(),
        Some(&"defaults".to_string())
    );
}

#[test]
fn optional_with_two_providers_fails_naming_the_capability() {
    let mut container = Container::new();
    let settings = optional("settings");
    container.install(settings.resolver());
    container.install(settings.provider(vec![], string_provider("first")));
    container.install(settings.provider(vec![], string_provider("second")));

    let error = container
        .resolve(settings.resolve_identity())
        .expect_err("two providers must be rejected");
    assert!(error.to_string().contains("at most one implementation"));
    assert!(error.to_string().contains("settings"));
}

#[test]
fn singleton_with_one_provider_yields_the_value_unwrapped() {
    let mut container = Container::new();
    let unique = singleton("unique");
    container.install(unique.resolver());
    container.install(unique.provider(vec![], string_provider("only")));

    let resolved = container
        .resolve(unique.resolve_identity())
        .expect("exactly one provider is allowed");
    assert_eq!(
        resolved[0].downcast_ref::<String>(),
        Some(&"only".to_string())
    );
}

#[test]
fn singleton_with_zero_providers_fails_naming_the_capability() {
    let mut container = Container::new();
    let unique = singleton("unique");
    container.install(unique.resolver());

    let error = container
        .resolve(unique.resolve_identity())
        .expect_err("zero providers must be rejected");
    assert_eq!(
        error,
        ResolveError::NotExactlyOne {
            capability: "unique".to_string(),
            found: 0,
        }
    );
    assert!(error.to_string().contains("exactly one implementation"));
    assert!(error.to_string().contains("unique"));
}

#[test]
fn singleton_with_two_providers_fails_naming_the_capability() {
    let mut container = Container::new();
    let unique = singleton("unique");
    container.install(unique.resolver());
    container.install(unique.provider(vec![], string_provider("first")));
    container.install(unique.provider(vec![], string_provider("second")));

    let error = container
        .resolve(unique.resolve_identity())
        .expect_err("two providers must be rejected");
    assert_eq!(
        error,
        ResolveError::NotExactlyOne {
            capability: "unique".to_string(),
            found: 2,
        }
    );
}

#[test]
fn resolution_is_idempotent_without_reinstalling() {
    let mut container = Container::new();
    let unique = singleton("unique");
    container.install(unique.resolver());
    container.install(unique.provider(vec![], string_provider("stable")));

    for _ in 0..2 {
        let resolved = container
            .resolve(unique.resolve_identity())
            .expect("resolution stays valid across repeats");
        assert_eq!(
            resolved[0].downcast_ref::<String>(),
            Some(&"stable".to_string())
        );
    }
}

#[test]
fn same_named_capabilities_do_not_collide_across_points() {
    let mut container = Container::new();
    let first = singleton("unique");
    let second = singleton("unique");

    container.install(first.resolver());
    container.install(first.provider(vec![], string_provider("mine")));
    container.install(second.resolver());

    let resolved = container
        .resolve(first.resolve_identity())
        .expect("first point sees only its own provider");
    assert_eq!(
        resolved[0].downcast_ref::<String>(),
        Some(&"mine".to_string())
    );

    let error = container
        .resolve(second.resolve_identity())
        .expect_err("second point sees zero providers");
    assert_eq!(
        error,
        ResolveError::NotExactlyOne {
            capability: "unique".to_string(),
            found: 0,
        }
    );
}
