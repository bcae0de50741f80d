use anyhow::{Context, Result};
use lambda::{apply, full_simplify, lambda, lambdas, var, Normalizer, Substitution, Term};

const DEFAULT_MAX_PASSES: usize = 64;

fn max_passes() -> Result<usize> {
    match std::env::var("LAMBDA_MAX_PASSES") {
        Ok(v) => v
            .parse()
            .with_context(|| format!("LAMBDA_MAX_PASSES is not a number: `{v}`")),
        Err(std::env::VarError::NotPresent) => Ok(DEFAULT_MAX_PASSES),
        Err(e) => Err(e.into()),
    }
}

fn church(n: usize) -> Term {
    let body = (0..n).fold(var("x"), |acc, _| apply(var("f"), acc));
    lambdas(["f", "x"], body)
}

fn show(label: &str, term: &Term) {
    println!("{label:<12} {term}");
}

fn main() -> Result<()> {
    env_logger::init();

    let id = lambda("x", var("x"));
    show("id z", &id.apply(&var("z")));

    let k = lambdas(["x", "y"], var("x"));
    show("k a b", &k.apply(&var("a")).apply(&var("b")));

    let s = lambdas(
        ["x", "y", "z"],
        apply(
            apply(var("x"), var("z")),
            apply(var("y"), var("z")),
        ),
    );
    show("s k k", &s.apply(&k).apply(&k));

    let plus = lambdas(
        ["m", "n", "f", "x"],
        apply(
            apply(var("m"), var("f")),
            apply(apply(var("n"), var("f")), var("x")),
        ),
    );
    let times = lambdas(["m", "n", "f"], apply(var("m"), apply(var("n"), var("f"))));
    show("2", &church(2));
    show("2 + 3", &plus.apply(&church(2)).apply(&church(3)));
    show("2 * 3", &times.apply(&church(2)).apply(&church(3)));

    let capture = lambda("y", apply(var("y"), var("x")));
    let subst = Substitution::new("x".into(), lambda("z", apply(var("z"), var("y"))));
    let captured = capture.substitute(&subst);
    show("capture", &captured);
    show(
        "unshadowed",
        &full_simplify(&captured, &["w".into()]).context("unshadowing")?,
    );

    show("eta", &lambda("x", apply(var("f"), var("x"))));

    let half = lambda("x", apply(apply(var("x"), var("x")), var("x")));
    let grows = Term::Apply(half.clone().into(), half.into());
    match Normalizer::new().with_max_passes(max_passes()?).normalize(&grows) {
        Ok(term) => show("grows", &term),
        Err(e) => println!("{:<12} {e}", "grows"),
    }
    Ok(())
}
