use super::*;
use crate::validate::{check_not_empty, check_range, check_true};
use crossterm::event::KeyCode;
use proptest::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
struct ProxyConfig {
    host: String,
    port: u16,
}

impl Validatable for ProxyConfig {
    fn check_invariants(&self) -> Result<(), InvariantViolation> {
        check_not_empty(&self.host, "proxy.host", "Proxy host")?;
        check_range(self.port, 1, 65535, "proxy.port", "Proxy port")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct LaunchConfig {
    name: String,
    max_heap: u32,
    gui: bool,
    header: usize,
    priority: usize,
    classpath: Vec<String>,
    args: Vec<String>,
    env: Option<Vec<String>>,
    proxy: Option<ProxyConfig>,
}

impl Validatable for LaunchConfig {
    fn check_invariants(&self) -> Result<(), InvariantViolation> {
        check_not_empty(&self.name, "name", "Name")?;
        check_range(self.max_heap, 16, 4096, "maxHeap", "Max heap")?;
        for (i, entry) in self.classpath.iter().enumerate() {
            check_true(
                entry.ends_with(".jar"),
                &format!("classpath.{i}"),
                "Classpath entries must be jar files",
            )?;
        }
        Ok(())
    }
}

struct Screen {
    registry: Registry<LaunchConfig>,
    name: Handle<TextInput>,
    max_heap: Handle<TextInput>,
    gui: Handle<Toggle>,
    header: Handle<RadioGroup>,
    priority: Handle<ComboBox>,
    classpath: Handle<ListView>,
    args: Handle<TextArea>,
    env_gate: Handle<Toggle>,
    env: Handle<TextArea>,
    proxy_gate: Handle<Toggle>,
    proxy_host: Handle<TextInput>,
    proxy_port: Handle<TextInput>,
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn screen() -> Screen {
    let mut s = Screen {
        registry: Registry::new(),
        name: Handle::new(TextInput::new("Name")),
        max_heap: Handle::new(TextInput::new("Max heap")),
        gui: Handle::new(Toggle::new("GUI")),
        header: Handle::new(RadioGroup::new("Header", labels(&["gui", "console"]))),
        priority: Handle::new(ComboBox::new(
            "Priority",
            labels(&["normal", "idle", "high"]),
        )),
        classpath: Handle::new(ListView::new("Classpath")),
        args: Handle::new(TextArea::new("Args")),
        env_gate: Handle::new(Toggle::new("Custom environment")),
        env: Handle::new(TextArea::new("Environment")),
        proxy_gate: Handle::new(Toggle::new("Use proxy")),
        proxy_host: Handle::new(TextInput::new("Proxy host")),
        proxy_port: Handle::new(TextInput::new("Proxy port")),
    };
    s.registry
        .add_optional(
            Property::new(
                "proxy",
                |c: &LaunchConfig| c.proxy.clone(),
                |c: &mut LaunchConfig, v: Option<ProxyConfig>| c.proxy = v,
            ),
            s.proxy_gate.clone(),
            false,
        )
        .unwrap()
        .add_text(
            Property::new(
                "name",
                |c: &LaunchConfig| c.name.clone(),
                |c: &mut LaunchConfig, v: String| c.name = v,
            ),
            s.name.clone(),
            "",
        )
        .unwrap()
        .add_text(
            Property::new(
                "maxHeap",
                |c: &LaunchConfig| c.max_heap,
                |c: &mut LaunchConfig, v: u32| c.max_heap = v,
            ),
            s.max_heap.clone(),
            "256",
        )
        .unwrap()
        .add_toggle(
            Property::new(
                "gui",
                |c: &LaunchConfig| c.gui,
                |c: &mut LaunchConfig, v: bool| c.gui = v,
            ),
            s.gui.clone(),
            true,
        )
        .unwrap()
        .add_radio(
            Property::new(
                "header",
                |c: &LaunchConfig| c.header,
                |c: &mut LaunchConfig, v: usize| c.header = v,
            ),
            s.header.clone(),
            0,
        )
        .unwrap()
        .add_combo(
            Property::new(
                "priority",
                |c: &LaunchConfig| c.priority,
                |c: &mut LaunchConfig, v: usize| c.priority = v,
            ),
            s.priority.clone(),
            0,
        )
        .unwrap()
        .add_list(
            Property::new(
                "classpath",
                |c: &LaunchConfig| c.classpath.clone(),
                |c: &mut LaunchConfig, v: Vec<String>| c.classpath = v,
            ),
            s.classpath.clone(),
        )
        .unwrap()
        .add_text_list(
            Property::new(
                "args",
                |c: &LaunchConfig| c.args.clone(),
                |c: &mut LaunchConfig, v: Vec<String>| c.args = v,
            ),
            s.args.clone(),
        )
        .unwrap()
        .add_opt_text_list(
            Property::new(
                "env",
                |c: &LaunchConfig| c.env.clone(),
                |c: &mut LaunchConfig, v: Option<Vec<String>>| c.env = v,
            ),
            s.env_gate.clone(),
            s.env.clone(),
        )
        .unwrap()
        .add_text(
            Property::nested(
                "proxy.host",
                |c: &LaunchConfig| c.proxy.as_ref().map(|p| p.host.clone()),
                |c: &mut LaunchConfig, v: String| c.proxy.as_mut().map(|p| p.host = v),
            ),
            s.proxy_host.clone(),
            "",
        )
        .unwrap()
        .add_text(
            Property::nested(
                "proxy.port",
                |c: &LaunchConfig| c.proxy.as_ref().map(|p| p.port),
                |c: &mut LaunchConfig, v: u16| c.proxy.as_mut().map(|p| p.port = v),
            ),
            s.proxy_port.clone(),
            "8080",
        )
        .unwrap();
    s
}

fn valid_config() -> LaunchConfig {
    LaunchConfig {
        name: "app".into(),
        max_heap: 512,
        gui: true,
        header: 1,
        priority: 2,
        classpath: labels(&["lib/a.jar", "lib/b.jar"]),
        args: labels(&["-Xss1m", "-Dmode=prod"]),
        env: Some(labels(&["JAVA_HOME=/opt/jre"])),
        proxy: Some(ProxyConfig {
            host: "proxy.local".into(),
            port: 3128,
        }),
    }
}

fn text(h: &Handle<TextInput>) -> String {
    h.with(|w| w.text().to_string())
}

fn type_text(h: &Handle<TextInput>, s: &str) {
    for c in s.chars() {
        h.on_key(KeyCode::Char(c));
    }
}

#[test]
fn refresh_then_commit_round_trips_into_fresh_model() {
    let s = screen();
    let expected = valid_config();
    s.registry.refresh(&expected).unwrap();

    let mut copy = LaunchConfig::default();
    s.registry.commit(&mut copy).unwrap();
    assert_eq!(copy, expected);
}

#[test]
fn round_trip_with_absent_optionals() {
    let s = screen();
    let expected = LaunchConfig {
        env: None,
        proxy: None,
        classpath: Vec::new(),
        args: Vec::new(),
        ..valid_config()
    };
    s.registry.refresh(&expected).unwrap();
    let mut copy = valid_config();
    s.registry.commit(&mut copy).unwrap();
    assert_eq!(copy, expected);
}

proptest! {
    #[test]
    fn prop_round_trip(
        name in "[a-z][a-z0-9]{0,11}",
        max_heap in 16u32..=4096,
        gui in any::<bool>(),
        header in 0usize..2,
        priority in 0usize..3,
        classpath in prop::collection::vec("[a-z]{1,8}\\.jar", 0..4),
        args in prop::collection::vec("-[A-Za-z]{1,6}", 0..4),
        env in prop::option::of(prop::collection::vec("[A-Z]{1,4}=[a-z]{1,4}", 0..3)),
        proxy in prop::option::of(("[a-z]{1,10}", 1u16..=65535)),
    ) {
        let s = screen();
        let expected = LaunchConfig {
            name,
            max_heap,
            gui,
            header,
            priority,
            classpath,
            args,
            env,
            proxy: proxy.map(|(host, port)| ProxyConfig { host, port }),
        };
        s.registry.refresh(&expected).unwrap();
        let mut copy = LaunchConfig::default();
        s.registry.commit(&mut copy).unwrap();
        prop_assert_eq!(copy, expected);
    }
}

#[test]
fn clear_twice_matches_clear_once() {
    let s = screen();
    s.registry.refresh(&valid_config()).unwrap();
    type_text(&s.name, "x");
    assert!(s.registry.is_modified());

    s.registry.clear();
    let snapshot = (
        text(&s.name),
        text(&s.max_heap),
        s.gui.with(|t| t.is_on()),
        s.header.with(|g| g.selected()),
        s.priority.with(|c| c.selected()),
        s.classpath.with(|l| l.items().to_vec()),
        s.args.with(|a| a.text()),
        s.env_gate.with(|t| t.is_on()),
        s.proxy_gate.with(|t| t.is_on()),
        text(&s.proxy_port),
    );
    assert!(!s.registry.is_modified());

    s.registry.clear();
    let again = (
        text(&s.name),
        text(&s.max_heap),
        s.gui.with(|t| t.is_on()),
        s.header.with(|g| g.selected()),
        s.priority.with(|c| c.selected()),
        s.classpath.with(|l| l.items().to_vec()),
        s.args.with(|a| a.text()),
        s.env_gate.with(|t| t.is_on()),
        s.proxy_gate.with(|t| t.is_on()),
        text(&s.proxy_port),
    );
    assert_eq!(snapshot, again);
    assert!(!s.registry.is_modified());
    assert_eq!(
        snapshot,
        (
            String::new(),
            "256".to_string(),
            true,
            Some(0),
            Some(0),
            Vec::new(),
            String::new(),
            false,
            false,
            "8080".to_string()
        )
    );
}

#[test]
fn clear_disables_bindings_under_gated_off_component() {
    let s = screen();
    s.registry.clear();
    assert!(!s.proxy_host.is_enabled());
    assert!(!s.proxy_port.is_enabled());
    assert!(s.name.is_enabled());
}

#[test]
fn duplicate_paths_are_rejected_in_each_map() {
    let mut s = screen();
    let err = s
        .registry
        .add_toggle(
            Property::new(
                "name",
                |c: &LaunchConfig| c.gui,
                |c: &mut LaunchConfig, v: bool| c.gui = v,
            ),
            Handle::new(Toggle::new("again")),
            false,
        )
        .err()
        .unwrap();
    assert_eq!(err, RegistrationError::Duplicate("name".into()));

    let err = s
        .registry
        .add_optional(
            Property::new(
                "proxy",
                |c: &LaunchConfig| c.proxy.clone(),
                |c: &mut LaunchConfig, v: Option<ProxyConfig>| c.proxy = v,
            ),
            Handle::new(Toggle::new("again")),
            true,
        )
        .err()
        .unwrap();
    assert_eq!(err, RegistrationError::Duplicate("proxy".into()));
}

#[test]
fn duplicate_path_fails_for_every_widget_kind() {
    let mut s = screen();
    let before = s.registry.len();
    let taken = || Some(RegistrationError::Duplicate("name".into()));
    let index = || {
        Property::new(
            "name",
            |c: &LaunchConfig| c.header,
            |c: &mut LaunchConfig, v: usize| c.header = v,
        )
    };
    let items = || {
        Property::new(
            "name",
            |c: &LaunchConfig| c.args.clone(),
            |c: &mut LaunchConfig, v: Vec<String>| c.args = v,
        )
    };
    let r = &mut s.registry;

    let err = r
        .add_text(
            Property::new(
                "name",
                |c: &LaunchConfig| c.max_heap,
                |c: &mut LaunchConfig, v: u32| c.max_heap = v,
            ),
            Handle::new(TextInput::new("again")),
            "",
        )
        .err();
    assert_eq!(err, taken());
    let err = r
        .add_text_area(
            Property::new(
                "name",
                |c: &LaunchConfig| c.name.clone(),
                |c: &mut LaunchConfig, v: String| c.name = v,
            ),
            Handle::new(TextArea::new("again")),
            "",
        )
        .err();
    assert_eq!(err, taken());
    let err = r
        .add_radio(
            index(),
            Handle::new(RadioGroup::new("again", labels(&["a", "b"]))),
            0,
        )
        .err();
    assert_eq!(err, taken());
    let err = r
        .add_combo(
            index(),
            Handle::new(ComboBox::new("again", labels(&["a", "b"]))),
            1,
        )
        .err();
    assert_eq!(err, taken());
    let err = r
        .add_list(items(), Handle::new(ListView::new("again")))
        .err();
    assert_eq!(err, taken());
    let err = r
        .add_text_list(items(), Handle::new(TextArea::new("again")))
        .err();
    assert_eq!(err, taken());
    let err = r
        .add_opt_text_list(
            Property::new(
                "name",
                |c: &LaunchConfig| c.env.clone(),
                |c: &mut LaunchConfig, v: Option<Vec<String>>| c.env = v,
            ),
            Handle::new(Toggle::new("again")),
            Handle::new(TextArea::new("again")),
        )
        .err();
    assert_eq!(err, taken());

    assert_eq!(r.len(), before);
}

#[test]
fn gate_key_press_cascades_to_nested_bindings() {
    let s = screen();
    s.registry.refresh(&valid_config()).unwrap();
    assert!(s.proxy_host.is_enabled());
    assert!(!s.registry.is_modified());

    assert!(s.proxy_gate.on_key(KeyCode::Char(' ')));
    assert!(!s.proxy_host.is_enabled());
    assert!(!s.proxy_port.is_enabled());
    assert!(s.name.is_enabled());
    assert!(s.registry.is_modified());

    assert!(s.proxy_gate.on_key(KeyCode::Enter));
    assert!(s.proxy_host.is_enabled());
    assert!(s.proxy_port.is_enabled());
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Memo {
    subject: String,
    body: String,
    cc: Option<Vec<String>>,
    cc_enabled: bool,
}

impl Validatable for Memo {
    fn check_invariants(&self) -> Result<(), InvariantViolation> {
        check_not_empty(&self.subject, "subject", "Subject")
    }
}

struct MemoScreen {
    registry: Registry<Memo>,
    body: Handle<TextArea>,
    cc_gate: Handle<Toggle>,
    cc: Handle<TextArea>,
}

fn memo_screen() -> MemoScreen {
    let mut s = MemoScreen {
        registry: Registry::new(),
        body: Handle::new(TextArea::new("Body")),
        cc_gate: Handle::new(Toggle::new("Send copies")),
        cc: Handle::new(TextArea::new("Copies to")),
    };
    s.registry
        .add_text(
            Property::new(
                "subject",
                |m: &Memo| m.subject.clone(),
                |m: &mut Memo, v: String| m.subject = v,
            ),
            Handle::new(TextInput::new("Subject")),
            "",
        )
        .unwrap()
        .add_text_area(
            Property::new(
                "body",
                |m: &Memo| m.body.clone(),
                |m: &mut Memo, v: String| m.body = v,
            ),
            s.body.clone(),
            "Dear all,",
        )
        .unwrap()
        .add_opt_text_list_with_state(
            Property::new(
                "cc",
                |m: &Memo| m.cc.clone(),
                |m: &mut Memo, v: Option<Vec<String>>| m.cc = v,
            ),
            Property::new(
                "ccEnabled",
                |m: &Memo| m.cc_enabled,
                |m: &mut Memo, v: bool| m.cc_enabled = v,
            ),
            s.cc_gate.clone(),
            s.cc.clone(),
        )
        .unwrap();
    s
}

#[test]
fn text_area_round_trips_multi_line_string() {
    let s = memo_screen();
    let expected = Memo {
        subject: "Release".into(),
        body: "Hi team,\n\nthe build is out.".into(),
        cc: Some(labels(&["ops@example.com", "qa@example.com"])),
        cc_enabled: true,
    };
    s.registry.refresh(&expected).unwrap();
    assert_eq!(s.body.with(|w| w.lines().len()), 3);

    let mut copy = Memo::default();
    s.registry.commit(&mut copy).unwrap();
    assert_eq!(copy, expected);

    s.registry.clear();
    assert_eq!(s.body.with(|w| w.text()), "Dear all,");
    assert_eq!(s.registry.lookup("body").map(|b| b.kind()), Some("multi-text"));
}

#[test]
fn typing_into_text_area_sets_modified_flag() {
    let s = memo_screen();
    s.registry.clear();
    s.body.on_key(KeyCode::Enter);
    assert!(s.registry.is_modified());
}

#[test]
fn gate_state_is_written_to_its_own_field() {
    let s = memo_screen();
    let model = Memo {
        subject: "Release".into(),
        cc: Some(labels(&["ops@example.com"])),
        cc_enabled: false,
        ..Memo::default()
    };
    s.registry.refresh(&model).unwrap();
    assert!(!s.cc_gate.with(|t| t.is_on()));
    assert!(!s.cc.is_enabled());

    s.cc_gate.on_key(KeyCode::Char(' '));
    let mut copy = Memo::default();
    s.registry.commit(&mut copy).unwrap();
    assert!(copy.cc_enabled);
    assert_eq!(copy.cc, Some(labels(&["ops@example.com"])));
}

#[test]
fn same_path_may_live_in_both_maps() {
    let mut s = screen();
    // "proxy" is only taken in the optional map
    s.registry
        .add_text(
            Property::new(
                "proxy",
                |c: &LaunchConfig| c.name.clone(),
                |c: &mut LaunchConfig, v: String| c.name = v,
            ),
            Handle::new(TextInput::new("shadow")),
            "",
        )
        .unwrap();
    assert!(s.registry.lookup("proxy").is_some());
    assert!(s.registry.lookup_component("proxy").is_some());
}

#[test]
fn empty_path_and_bad_default_fail_registration() {
    let mut r: Registry<LaunchConfig> = Registry::new();
    let err = r
        .add_toggle(
            Property::new(
                "",
                |c: &LaunchConfig| c.gui,
                |c: &mut LaunchConfig, v: bool| c.gui = v,
            ),
            Handle::new(Toggle::new("x")),
            false,
        )
        .err()
        .unwrap();
    assert_eq!(err, RegistrationError::EmptyPath);

    let err = r
        .add_combo(
            Property::new(
                "priority",
                |c: &LaunchConfig| c.priority,
                |c: &mut LaunchConfig, v: usize| c.priority = v,
            ),
            Handle::new(ComboBox::new("Priority", labels(&["a"]))),
            3,
        )
        .err()
        .unwrap();
    assert!(matches!(
        err,
        RegistrationError::DefaultOutOfRange { index: 3, len: 1, .. }
    ));
    assert!(r.is_empty());
}

#[test]
fn gate_off_commit_nulls_component_and_ignores_stale_nested_widgets() {
    let s = screen();
    s.registry.refresh(&valid_config()).unwrap();
    s.proxy_port.edit(|w| w.set_text("not a port"));
    s.proxy_host.edit(|w| w.set_text(""));
    s.proxy_gate.on_key(KeyCode::Char(' '));
    assert!(!s.proxy_gate.with(|t| t.is_on()));

    let mut model = valid_config();
    s.registry.commit(&mut model).unwrap();
    assert_eq!(model.proxy, None);
}

#[test]
fn gate_on_commit_materializes_and_validates_component() {
    let s = screen();
    let mut model = LaunchConfig {
        proxy: None,
        ..valid_config()
    };
    s.registry.refresh(&model).unwrap();
    assert!(!s.proxy_host.is_enabled());

    s.proxy_gate.on_key(KeyCode::Enter);
    assert!(s.proxy_host.is_enabled());
    assert!(s.registry.is_modified());

    // Host left blank: the nested object exists and gets validated
    let err = s.registry.commit(&mut model).unwrap_err();
    let violation = err.violation().unwrap();
    assert_eq!(violation.property(), "proxy.host");
    let attached = err.binding().unwrap();
    assert!(Rc::ptr_eq(attached, &s.registry.lookup("proxy.host").unwrap()));
    assert!(s.registry.is_modified());

    type_text(&s.proxy_host, "gw");
    s.registry.commit(&mut model).unwrap();
    assert_eq!(
        model.proxy,
        Some(ProxyConfig {
            host: "gw".into(),
            port: 8080
        })
    );
    assert!(!s.registry.is_modified());
}

#[test]
fn refresh_clears_and_disables_widgets_under_absent_component() {
    let s = screen();
    s.registry.refresh(&valid_config()).unwrap();
    assert_eq!(text(&s.proxy_host), "proxy.local");
    assert!(s.proxy_host.is_enabled());

    let model = LaunchConfig {
        proxy: None,
        ..valid_config()
    };
    s.registry.refresh(&model).unwrap();
    assert_eq!(text(&s.proxy_host), "");
    assert_eq!(text(&s.proxy_port), "8080");
    assert!(!s.proxy_host.is_enabled());
    assert!(!s.proxy_gate.with(|t| t.is_on()));
    assert!(!s.registry.is_modified());
}

#[test]
fn set_enabled_uses_plain_string_prefix() {
    #[derive(Default)]
    struct Flags {
        a: String,
        b: String,
        c: String,
    }
    impl Validatable for Flags {
        fn check_invariants(&self) -> Result<(), InvariantViolation> {
            Ok(())
        }
    }

    let xa = Handle::new(TextInput::new("x.a"));
    let xylophone = Handle::new(TextInput::new("xylophone.y"));
    let other = Handle::new(TextInput::new("other"));
    let mut r: Registry<Flags> = Registry::new();
    r.add_text(
        Property::new("x.a", |f: &Flags| f.a.clone(), |f: &mut Flags, v: String| f.a = v),
        xa.clone(),
        "",
    )
    .unwrap()
    .add_text(
        Property::new(
            "xylophone.y",
            |f: &Flags| f.b.clone(),
            |f: &mut Flags, v: String| f.b = v,
        ),
        xylophone.clone(),
        "",
    )
    .unwrap()
    .add_text(
        Property::new("other", |f: &Flags| f.c.clone(), |f: &mut Flags, v: String| f.c = v),
        other.clone(),
        "",
    )
    .unwrap();

    r.set_enabled("x", false);
    assert!(!xa.is_enabled());
    assert!(!xylophone.is_enabled());
    assert!(other.is_enabled());

    r.set_enabled("x.", true);
    assert!(xa.is_enabled());
    assert!(!xylophone.is_enabled());
}

#[test]
fn violation_is_attributed_to_exact_binding() {
    let s = screen();
    s.registry.refresh(&valid_config()).unwrap();
    s.name.edit(|w| w.set_text("  "));

    let mut model = LaunchConfig::default();
    let err = s.registry.commit(&mut model).unwrap_err();
    let attached = err.binding().expect("name is bound");
    assert!(Rc::ptr_eq(attached, &s.registry.lookup("name").unwrap()));
    assert_eq!(attached.property(), "name");

    attached.mark_invalid();
    assert!(s.name.is_invalid());
    s.registry.mark_all_valid();
    assert!(!s.name.is_invalid());
}

#[test]
fn violation_without_exact_binding_has_no_widget() {
    let s = screen();
    let model = LaunchConfig {
        classpath: labels(&["lib/a.jar", "classes/"]),
        ..valid_config()
    };
    s.registry.refresh(&model).unwrap();
    let mut target = LaunchConfig::default();
    let err = s.registry.commit(&mut target).unwrap_err();
    assert_eq!(err.violation().unwrap().property(), "classpath.1");
    assert!(err.binding().is_none());
    // Pulled values stay in the model even though validation failed
    assert_eq!(target.name, "app");
}

#[test]
fn conversion_fault_is_a_binding_failure() {
    let s = screen();
    s.registry.refresh(&valid_config()).unwrap();
    s.max_heap.edit(|w| w.set_text("big"));
    let mut model = LaunchConfig::default();
    let err = s.registry.commit(&mut model).unwrap_err();
    assert!(matches!(
        err,
        CommitError::Binding(BindingError::Conversion { ref property, .. }) if property == "maxHeap"
    ));
    assert!(err.violation().is_none());
    assert!(s.registry.is_modified());
}

#[test]
fn unresolved_nested_path_is_a_binding_failure() {
    #[derive(Default)]
    struct Loose {
        proxy: Option<ProxyConfig>,
    }
    impl Validatable for Loose {
        fn check_invariants(&self) -> Result<(), InvariantViolation> {
            Ok(())
        }
    }

    // No optional component registered: nothing shields the nested path.
    let mut r: Registry<Loose> = Registry::new();
    r.add_text(
        Property::nested(
            "proxy.host",
            |c: &Loose| c.proxy.as_ref().map(|p| p.host.clone()),
            |c: &mut Loose, v: String| c.proxy.as_mut().map(|p| p.host = v),
        ),
        Handle::new(TextInput::new("Host")),
        "",
    )
    .unwrap();
    assert_eq!(
        r.refresh(&Loose::default()),
        Err(BindingError::Unresolved("proxy.host".into()))
    );
}

#[test]
fn user_edits_set_modified_flag() {
    let s = screen();
    s.registry.refresh(&valid_config()).unwrap();
    assert!(!s.registry.is_modified());

    s.priority.on_key(KeyCode::Up);
    assert!(s.registry.is_modified());
    s.registry.refresh(&valid_config()).unwrap();

    s.classpath.on_key(KeyCode::Delete);
    assert!(s.registry.is_modified());
    s.registry.refresh(&valid_config()).unwrap();

    // Cursor moves do not change the value
    s.classpath.on_key(KeyCode::Down);
    assert!(!s.registry.is_modified());

    s.env_gate.on_key(KeyCode::Char(' '));
    assert!(s.registry.is_modified());
    assert!(!s.env.is_enabled());
}

#[test]
fn prefix_check_covers_sibling_names_sharing_the_prefix() {
    // "proxyNotes" starts with "proxy" and is treated as part of the component
    let mut s = screen();
    let notes = Handle::new(TextInput::new("Notes"));
    s.registry
        .add_text(
            Property::new(
                "proxyNotes",
                |c: &LaunchConfig| c.name.clone(),
                |c: &mut LaunchConfig, v: String| c.name = v,
            ),
            notes.clone(),
            "",
        )
        .unwrap();
    let model = LaunchConfig {
        proxy: None,
        ..valid_config()
    };
    s.registry.refresh(&model).unwrap();
    assert_eq!(text(&notes), "");
    assert!(!notes.is_enabled());
}

#[test]
fn describe_routes_binding_faults_through_messages() {
    let messages = crate::messages::Messages::from_yaml_str(
        "messages:\n  Bindings.failure: \"Internal error: {0}\"\n",
    )
    .unwrap();
    let s = screen();
    s.registry.refresh(&valid_config()).unwrap();
    s.max_heap.edit(|w| w.set_text("big"));
    let err = s.registry.commit(&mut LaunchConfig::default()).unwrap_err();
    assert!(err
        .describe(&messages)
        .starts_with("Internal error: cannot convert 'big'"));

    s.max_heap.edit(|w| w.set_text("8"));
    let err = s.registry.commit(&mut LaunchConfig::default()).unwrap_err();
    assert_eq!(err.describe(&messages), "Max heap must be in range [16-4096]");
}

#[test]
fn scenario_edit_name_with_proxy_off() {
    let s = screen();
    let mut model = LaunchConfig {
        name: "app".into(),
        proxy: None,
        ..valid_config()
    };
    s.registry.clear();
    s.registry.refresh(&model).unwrap();
    assert_eq!(text(&s.name), "app");
    assert!(!s.proxy_gate.with(|t| t.is_on()));

    type_text(&s.name, "2");
    assert!(s.registry.is_modified());

    s.registry.commit(&mut model).unwrap();
    assert_eq!(model.name, "app2");
    assert_eq!(model.proxy, None);
    assert!(!s.registry.is_modified());
}
