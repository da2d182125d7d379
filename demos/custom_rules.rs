use veto::{Outcome, RuleRegistry, Session};

fn main() {
    let registry = RuleRegistry::with_builtins();

    registry.rule(
        "hex_color",
        |value, _params, _hint| {
            let ok = value.as_str().is_some_and(|s| {
                s.len() == 7
                    && s.starts_with('#')
                    && s[1..].chars().all(|c| c.is_ascii_hexdigit())
            });
            Ok(Outcome::new(ok, value.clone()))
        },
        Some("The :field field must be a #rrggbb color"),
    );
    registry.catalog().translate(
        "fr",
        [("hex_color", "Le champ :field doit être une couleur #rrggbb")],
    );

    let mut session = Session::builder("required|hex_color")
        .registry(&registry)
        .attribute("accent")
        .locale("fr")
        .build();

    for value in ["#ff8800", "red"] {
        match session.check(value) {
            Ok(true) => println!("{value:?}: ok"),
            Ok(false) => println!("{value:?}: {}", session.messages().join("; ")),
            Err(err) => println!("{value:?}: configuration error: {err}"),
        }
    }
}
