use fluent_model::{FluentModel, Model, ModelError, ValidationError, ValidationIssue, ValidationResult, fluent_setter};

#[derive(Debug, Default, PartialEq, FluentModel)]
struct Pair {
    a: i64,
    #[fluent(validate(length(max = 5)))]
    b: String,
}

#[test]
fn chained_setters_assign_and_return_same_instance() {
    let mut pair = Pair::default();
    let ptr: *const Pair = &pair;

    let returned = pair.with_a(1).expect("a set").with_b("ok").expect("b set");
    assert!(std::ptr::eq(&*returned, ptr));

    assert_eq!(pair.a, 1);
    assert_eq!(pair.b, "ok");
}

#[test]
fn invalid_value_interrupts_chain_and_keeps_prior_value() {
    let mut pair = Pair::default();
    pair.with_a(1).expect("a set").with_b("ok").expect("b set");

    let err = pair.with_b("toolong").unwrap_err();
    assert_eq!(err.issues.len(), 1);
    assert_eq!(err.issues[0].field, "b");
    assert_eq!(err.issues[0].code, "validation.length");
    assert_eq!(pair.b, "ok");

    let result = pair.with_a(7).and_then(|pair| pair.with_b("way too long"));
    assert!(result.is_err());
    assert_eq!(pair.a, 7, "fields set earlier in the chain stay set");
    assert_eq!(pair.b, "ok");
}

#[test]
fn setter_touches_only_its_field() {
    let mut pair = Pair { a: 5, b: "keep".to_string() };
    pair.with_a(9).expect("a set");
    assert_eq!(pair, Pair { a: 9, b: "keep".to_string() });
}

#[allow(clippy::ptr_arg)]
fn reject_blank(value: &String) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::single("", "validation.blank", "must not be blank"));
    }
    Ok(())
}

fn lowercase(value: String) -> String {
    value.to_lowercase()
}

#[derive(Debug, Default, FluentModel)]
struct Profile {
    #[fluent(validate(regex = "^[a-z0-9_]+$"), normalize = "lowercase")]
    handle: String,
    #[fluent(validate(range(min = 0, max = 130)))]
    age: u8,
    #[fluent(validate(custom = "reject_blank"))]
    display: String,
    #[fluent(validate(length(min = 1, max = 3)))]
    nickname: Option<String>,
    #[fluent(validate(length(max = 2)))]
    tags: Vec<String>,
    #[fluent(skip)]
    internal: bool,
    #[fluent(custom)]
    bio: String,
    r#type: String,
    _hidden: u32,
}

impl Profile {
    #[fluent_setter(bio)]
    pub fn with_bio(&mut self, value: String) -> Self {
        unreachable!("body is replaced")
    }

    #[fluent_setter(display)]
    fn rename<S: Into<String>>(&mut self, value: S) {}
}

#[test]
fn regex_range_and_custom_rules_apply_on_assignment() {
    let mut profile = Profile::default();

    assert!(profile.with_handle("Not Valid!").is_err());
    assert!(profile.handle.is_empty());

    let err = profile.with_age(200).unwrap_err();
    assert_eq!(err.issues[0].code, "validation.range");
    assert_eq!(profile.age, 0);

    let err = profile.with_display("   ").unwrap_err();
    assert_eq!(
        err.issues,
        [ValidationIssue::new("display", "validation.blank", "must not be blank")]
    );

    profile.with_age(30).expect("age set").with_display("Ada").expect("display set");
    assert_eq!((profile.age, profile.display.as_str()), (30, "Ada"));
}

#[test]
fn optional_and_vec_fields_validate_when_present() {
    let mut profile = Profile::default();
    profile.with_nickname(None).expect("none skips validation");
    assert!(profile.with_nickname(Some("toolong".to_string())).is_err());
    profile.with_nickname(Some("ada".to_string())).expect("short nickname");
    assert_eq!(profile.nickname.as_deref(), Some("ada"));

    assert!(profile.with_tags(vec!["a".into(), "b".into(), "c".into()]).is_err());
    assert!(profile.tags.is_empty());
}

#[test]
fn decorated_methods_assign_through_validated_setter() {
    let mut profile = Profile::default();
    let ptr: *const Profile = &profile;

    let returned = profile.with_bio("hello".to_string()).expect("bio set");
    assert!(std::ptr::eq(&*returned, ptr));
    assert_eq!(profile.bio, "hello");

    profile.rename("Grace").expect("display set");
    assert_eq!(profile.display, "Grace");
    assert!(profile.rename(" ").is_err());
    assert_eq!(profile.display, "Grace");
}

#[test]
fn skipped_fields_keep_validated_setter() {
    let mut profile = Profile::default();
    profile.set_internal(true).expect("plain setter still exists");
    assert!(profile.internal);
}

#[test]
fn reserved_and_underscore_names_get_valid_setters() {
    let mut profile = Profile::default();
    profile.with_type("admin").expect("type set").with__hidden(3).expect("hidden set");
    assert_eq!(profile.r#type, "admin");
    assert_eq!(profile._hidden, 3);
}

#[test]
fn validation_error_converts_for_callers_using_model_error() {
    fn configure(pair: &mut Pair) -> Result<(), ModelError> {
        pair.with_a(1)?.with_b("far too long")?;
        Ok(())
    }

    let mut pair = Pair::default();
    assert!(matches!(configure(&mut pair), Err(ModelError::Validation(_))));
    assert_eq!(pair.a, 1);
}

fn shout(value: String) -> String {
    format!("{}!!!!", value)
}

#[derive(Debug, Default, FluentModel)]
struct Banner {
    #[fluent(validate(length(max = 5)), normalize = "shout")]
    caption: String,
}

#[test]
fn normalized_value_must_still_pass_field_rules() {
    let mut banner = Banner::default();
    banner.with_caption("a").expect("short caption");
    assert_eq!(banner.caption, "a!!!!");

    let err = banner.with_caption("abcde").unwrap_err();
    assert_eq!(err.issues[0].code, "validation.length");
    assert_eq!(banner.caption, "a!!!!");

    let parsed = Banner { caption: "abcde".to_string() }.validated();
    assert!(parsed.is_err());
}

#[derive(Debug, Default, FluentModel)]
struct Gauge {
    #[fluent(validate(range(min = 0, max = 1)))]
    ratio: f64,
    #[fluent(validate(range(min = -1, max = 1)))]
    offset: Option<f32>,
}

#[test]
fn float_ranges_accept_integer_bounds() {
    let mut gauge = Gauge::default();
    gauge.with_ratio(0.5).expect("in range").with_offset(Some(-0.5)).expect("in range");
    assert_eq!((gauge.ratio, gauge.offset), (0.5, Some(-0.5)));

    assert!(gauge.with_ratio(1.5).is_err());
    assert!(gauge.with_offset(Some(-2.0)).is_err());
    assert_eq!((gauge.ratio, gauge.offset), (0.5, Some(-0.5)));
}
