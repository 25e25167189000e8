use folio::{value, Template};

#[test]
fn render_empty_template() {
    let result = Template::new("").render_value(&value!({}));
    assert_eq!(result, "");
}

#[test]
fn render_literal_passthrough() {
    let source = "# Title\n\nplain *markdown* text\n";
    let result = Template::new(source).render_value(&value!({}));
    assert_eq!(result, source);
}

#[test]
fn render_inline_expr_string() {
    let result = Template::new("Hello {{ name }}!").render_value(&value!({ name: "World" }));
    assert_eq!(result, "Hello World!");
}

#[test]
fn render_inline_expr_bool() {
    let result = Template::new("lorem {{ ipsum }}").render_value(&value!({ ipsum: true }));
    assert_eq!(result, "lorem true");
}

#[test]
fn render_inline_expr_i64() {
    let result = Template::new("lorem {{ ipsum }}").render_value(&value!({ ipsum: 123_i64 }));
    assert_eq!(result, "lorem 123");
}

#[test]
fn render_inline_expr_f64() {
    let result = Template::new("lorem {{ ipsum }}").render_value(&value!({ ipsum: 123.4_f64 }));
    assert_eq!(result, "lorem 123.4");
}

#[test]
fn render_inline_expr_none() {
    let result = Template::new("lorem {{ ipsum }}").render_value(&value!({ ipsum: None }));
    assert_eq!(result, "lorem ");
}

#[test]
fn render_inline_expr_missing() {
    let result = Template::new("Hello {{ name }}!").render_value(&value!({ other: 1 }));
    assert_eq!(result, "Hello !");
}

#[test]
fn render_inline_expr_list_removed() {
    let result = Template::new("x{{ items }}y").render_value(&value!({ items: [1, 2] }));
    assert_eq!(result, "xy");
}

#[test]
fn render_inline_expr_rigid_spacing() {
    let ctx = value!({ name: "x" });
    assert_eq!(Template::new("{{name}}").render_value(&ctx), "");
    assert_eq!(Template::new("{{  name  }}").render_value(&ctx), "");
    assert_eq!(Template::new("{{ name }}").render_value(&ctx), "x");
}

#[test]
fn render_for_scalars() {
    let result = Template::new("{% for item in items %}[{{ item }}]{% endfor %}")
        .render_value(&value!({ items: [1, 2, 3] }));
    assert_eq!(result, "[1][2][3]");
}

#[test]
fn render_for_records() {
    let result = Template::new("{% for p in ps %}{{ p.name }};{% endfor %}")
        .render_value(&value!({ ps: [{ name: "a" }, { name: "b" }] }));
    assert_eq!(result, "a;b;");
}

#[test]
fn render_for_empty_list() {
    let result = Template::new("{% for item in items %}x{% endfor %}")
        .render_value(&value!({ items: [] }));
    assert_eq!(result, "");
}

#[test]
fn render_for_missing_list() {
    let result =
        Template::new("{% for item in items %}x{% endfor %}").render_value(&value!({}));
    assert_eq!(result, "");
}

#[test]
fn render_for_non_list() {
    let result = Template::new("{% for item in items %}x{% endfor %}")
        .render_value(&value!({ items: "abc" }));
    assert_eq!(result, "");
}

#[test]
fn render_for_record_missing_field() {
    let result = Template::new("{% for p in ps %}{{ p.name }};{% endfor %}")
        .render_value(&value!({ ps: [{ name: "a" }, { other: "b" }] }));
    assert_eq!(result, "a;;");
}

#[test]
fn render_for_field_ref_on_scalar_item() {
    let result = Template::new("{% for p in ps %}{{ p.name }};{% endfor %}")
        .render_value(&value!({ ps: ["x"] }));
    assert_eq!(result, ";");
}

#[test]
fn render_for_flexible_block_spacing() {
    let result =
        Template::new("{%for x in items%}{{ x }}{%endfor%}").render_value(&value!({ items: [7] }));
    assert_eq!(result, "7");
}

#[test]
fn render_for_multiline_body() {
    let result = Template::new("{% for p in ps %}\n- {{ p.name }}\n{% endfor %}")
        .render_value(&value!({ ps: [{ name: "a" }] }));
    assert_eq!(result, "\n- a\n");
}

#[test]
fn render_for_var_shadowed_by_context_key() {
    let result = Template::new("{% for name in names %}{{ name }},{% endfor %}")
        .render_value(&value!({ name: "global", names: ["a", "b"] }));
    assert_eq!(result, "global,global,");
}

#[test]
fn render_if_truthy() {
    let result =
        Template::new("{% if flag %}Visible{% endif %}").render_value(&value!({ flag: true }));
    assert_eq!(result, "Visible");
}

#[test]
fn render_if_falsy() {
    let result =
        Template::new("{% if flag %}Visible{% endif %}").render_value(&value!({ flag: false }));
    assert_eq!(result, "");
}

#[test]
fn render_if_missing() {
    let result = Template::new("{% if flag %}Visible{% endif %}").render_value(&value!({}));
    assert_eq!(result, "");
}

#[test]
fn render_if_emptiness_is_falsy() {
    let template = Template::new("{% if flag %}Visible{% endif %}");
    assert_eq!(template.render_value(&value!({ flag: "" })), "");
    assert_eq!(template.render_value(&value!({ flag: 0 })), "");
    assert_eq!(template.render_value(&value!({ flag: [] })), "");
    assert_eq!(template.render_value(&value!({ flag: [0] })), "Visible");
}

#[test]
fn render_if_body_substituted_before_decision() {
    let template = Template::new("{% if show %}{{ secret }}{% endif %}");
    assert_eq!(
        template.render_value(&value!({ show: true, secret: "s" })),
        "s"
    );
    assert_eq!(
        template.render_value(&value!({ show: false, secret: "s" })),
        ""
    );
}

#[test]
fn render_if_spanning_lines() {
    let result = Template::new("{% if t %}\nA\n{% endif %}").render_value(&value!({ t: true }));
    assert_eq!(result, "\nA\n");
}

#[test]
fn render_directives_inside_loop_body_are_inert() {
    let template =
        Template::new("{% for x in xs %}{% if flag %}{{ x }}{% endif %}{% endfor %}");
    assert_eq!(
        template.render_value(&value!({ xs: [1, 2], flag: true })),
        "12"
    );
    assert_eq!(
        template.render_value(&value!({ xs: [1, 2], flag: false })),
        "12"
    );
}

#[test]
fn render_inner_loop_header_is_inert() {
    let result = Template::new(
        "{% for x in xs %}{% for y in ys %}.{% endfor %}{% endfor %}",
    )
    .render_value(&value!({ xs: [1, 2], ys: [1] }));
    assert_eq!(result, "..");
}

#[test]
fn render_unclosed_for_stripped() {
    let result =
        Template::new("a{% for x in items %}b").render_value(&value!({ items: [1] }));
    assert_eq!(result, "ab");
}

#[test]
fn render_unclosed_if_stripped() {
    let result = Template::new("a{% if x %}b").render_value(&value!({ x: true }));
    assert_eq!(result, "ab");
}

#[test]
fn render_stray_closers_dropped() {
    let ctx = value!({});
    assert_eq!(Template::new("a{% endfor %}b").render_value(&ctx), "ab");
    assert_eq!(Template::new("a{% endif %}b").render_value(&ctx), "ab");
}

#[test]
fn render_unknown_block_dropped() {
    let result = Template::new("a{% include foo %}b").render_value(&value!({}));
    assert_eq!(result, "ab");
}

#[test]
fn render_expr_spanning_lines_cleaned() {
    let result = Template::new("a{{\nx\n}}b").render_value(&value!({}));
    assert_eq!(result, "ab");
}

#[test]
fn render_unpaired_openers_stay_literal() {
    let ctx = value!({});
    assert_eq!(Template::new("a {{ b").render_value(&ctx), "a {{ b");
    assert_eq!(Template::new("a {% b").render_value(&ctx), "a {% b");
}

#[test]
fn render_unresolved_syntax_all_removed() {
    let source =
        "{{ x }}{% for a in b %}{{ a }}{% endfor %}{% if c %}y{% endif %}{% weird %}";
    let result = Template::new(source).render_value(&value!({}));
    assert_eq!(result, "");
}

#[test]
fn render_deterministic() {
    let template = Template::new("{{ n }} {% for i in is %}{{ i }}{% endfor %}");
    let ctx = value!({ n: "t", is: [1, 2] });
    assert_eq!(template.render_value(&ctx), template.render_value(&ctx));
}

#[derive(serde::Serialize)]
struct Ctx {
    title: String,
    items: Vec<Item>,
}

#[derive(serde::Serialize)]
struct Item {
    name: String,
}

#[test]
fn render_serde_context() {
    let ctx = Ctx {
        title: String::from("T"),
        items: vec![
            Item {
                name: String::from("a"),
            },
            Item {
                name: String::from("b"),
            },
        ],
    };
    let result = Template::new("{{ title }}: {% for item in items %}{{ item.name }} {% endfor %}")
        .render(&ctx)
        .unwrap();
    assert_eq!(result, "T: a b ");
}
