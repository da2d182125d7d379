use veto::Session;

fn main() {
    let mut session = Session::builder("required|number|between:18,40")
        .attribute("age")
        .build();

    for value in ["25", "17", "", "abc"] {
        match session.check(value) {
            Ok(true) => println!("{value:?}: ok"),
            Ok(false) => println!("{value:?}: {}", session.messages().join("; ")),
            Err(err) => println!("{value:?}: configuration error: {err}"),
        }
    }
}
