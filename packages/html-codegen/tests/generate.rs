use std::fs;
use std::path::Path;

use html_codegen::attributes::ValueKind;
use html_codegen::elements::StructuralKind;
use html_codegen::emit::HEADER;
use html_codegen::{
    generate, render, run, Catalogs, Composer, Config, ElementDescriptor, ElementTable, Error,
};
use pretty_assertions::assert_eq;
use quote::ToTokens;

fn config(dir: &Path) -> Config {
    Config {
        out_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

fn builtin_table() -> ElementTable {
    ElementTable::builtin(&Catalogs::builtin()).unwrap()
}

fn squash(tokens: impl ToTokens) -> String {
    tokens.to_token_stream().to_string().replace(' ', "")
}

fn traits(file: &syn::File) -> impl Iterator<Item = &syn::ItemTrait> {
    file.items.iter().filter_map(|item| match item {
        syn::Item::Trait(t) => Some(t),
        _ => None,
    })
}

fn methods(t: &syn::ItemTrait) -> Vec<&syn::TraitItemFn> {
    t.items
        .iter()
        .filter_map(|item| match item {
            syn::TraitItem::Fn(f) => Some(f),
            _ => None,
        })
        .collect()
}

/// First word of the first doc line: the display name the accessor was generated from.
fn doc_name(f: &syn::TraitItemFn) -> String {
    f.attrs
        .iter()
        .find_map(|attr| match &attr.meta {
            syn::Meta::NameValue(nv) if nv.path.is_ident("doc") => match &nv.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(s),
                    ..
                }) => s.value().split_whitespace().next().map(str::to_string),
                _ => None,
            },
            _ => None,
        })
        .unwrap_or_default()
}

fn files(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn generation_is_deterministic() {
    let first = generate(&Config::default()).unwrap();
    let second = generate(&Config::default()).unwrap();
    assert_eq!(first, second);

    for artifact in first.iter() {
        assert!(artifact.contents.starts_with(HEADER), "{}", artifact.file_name);
        syn::parse_file(&artifact.contents).unwrap();
    }
}

#[test]
fn every_element_is_emitted_in_table_order() {
    let table = builtin_table();
    let artifacts = generate(&Config::default()).unwrap();
    let builder = syn::parse_file(&artifacts.builder.contents).unwrap();
    let tests = syn::parse_file(&artifacts.tests.contents).unwrap();

    let trait_names: Vec<_> = traits(&builder).map(|t| t.ident.to_string()).collect();
    let expected: Vec<_> = table
        .elements()
        .iter()
        .map(|el| format!("Html{}", el.name))
        .collect();
    assert_eq!(trait_names, expected);

    let test_count = tests
        .items
        .iter()
        .filter(|item| matches!(item, syn::Item::Fn(_)))
        .count();
    assert_eq!(test_count, table.len());
}

#[test]
fn accessors_are_sorted_by_display_name() {
    let artifacts = generate(&Config::default()).unwrap();
    let builder = syn::parse_file(&artifacts.builder.contents).unwrap();

    for t in traits(&builder) {
        let methods = methods(t);
        let start = methods
            .iter()
            .take_while(|f| f.sig.ident == "body" || f.sig.ident == "text")
            .count();
        let on = methods
            .iter()
            .position(|f| f.sig.ident == "on")
            .unwrap_or(methods.len());

        let attributes: Vec<_> = methods[start..on].iter().map(|f| doc_name(f)).collect();
        let events: Vec<_> = methods[(on + 1).min(methods.len())..]
            .iter()
            .map(|f| doc_name(f))
            .collect();

        assert!(attributes.windows(2).all(|w| w[0] <= w[1]), "{}", t.ident);
        assert!(events.windows(2).all(|w| w[0] <= w[1]), "{}", t.ident);
    }
}

#[test]
fn structural_kinds_shape_the_contract() {
    let table = builtin_table();
    let artifacts = generate(&Config::default()).unwrap();
    let builder = syn::parse_file(&artifacts.builder.contents).unwrap();

    let private_bodies: Vec<String> = builder
        .items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Impl(imp) if imp.trait_.is_none() => Some(squash(&imp.self_ty)),
            _ => None,
        })
        .collect();

    for (el, t) in table.elements().iter().zip(traits(&builder)) {
        let names: Vec<_> = methods(t).iter().map(|f| f.sig.ident.to_string()).collect();
        let has_body = names.iter().any(|n| n == "body");
        let has_text = names.iter().any(|n| n == "text");
        let has_private = private_bodies.iter().any(|ty| ty == el.name);

        match el.kind {
            StructuralKind::Container => {
                assert!(has_body && has_text && !has_private, "{}", el.name)
            }
            StructuralKind::RestrictedContainer => {
                assert!(!has_body && !has_text && has_private, "{}", el.name)
            }
            StructuralKind::Childless => {
                assert!(!has_body && !has_text && !has_private, "{}", el.name)
            }
        }
    }
}

#[test]
fn every_contract_registers_named_events() {
    let artifacts = generate(&Config::default()).unwrap();
    let builder = syn::parse_file(&artifacts.builder.contents).unwrap();

    let missing: Vec<_> = traits(&builder)
        .filter(|t| !methods(t).iter().any(|f| f.sig.ident == "on"))
        .map(|t| t.ident.to_string())
        .collect();
    assert!(missing.is_empty(), "traits without on(): {missing:?}");

    // elements without resolved events still expose it
    let head = traits(&builder).find(|t| t.ident == "HtmlHead").unwrap();
    let on = methods(head)
        .into_iter()
        .find(|f| f.sig.ident == "on")
        .unwrap();
    assert_eq!(
        squash(&on.sig.inputs),
        "self,event:&str,h:implInto<EventHandler>"
    );
}

fn image_like() -> ElementDescriptor {
    let catalogs = Catalogs::builtin();
    let c = Composer::new(&catalogs);
    let attributes = c
        .global_attributes(c.html_attributes(&["src", "width", "height"]).unwrap())
        .unwrap();
    ElementDescriptor::childless("Img", "defines an image.").attributes(attributes)
}

#[test]
fn childless_element_builder() {
    let el = image_like();
    let artifacts = render(&ElementTable::new(vec![el.clone()]), &Config::default()).unwrap();
    let builder = syn::parse_file(&artifacts.builder.contents).unwrap();

    let t = traits(&builder).next().unwrap();
    let methods = methods(t);
    // one accessor per attribute plus the generic `on`
    assert_eq!(methods.len(), el.attributes.len() + 1);
    assert!(methods
        .iter()
        .all(|f| f.sig.ident != "body" && f.sig.ident != "text"));

    let signature = |name: &str| {
        let f = methods.iter().find(|f| f.sig.ident == name).unwrap();
        squash(&f.sig.inputs)
    };
    assert_eq!(signature("src"), "self,v:implInto<String>");
    assert_eq!(signature("width"), "self,v:i64");
    assert_eq!(signature("height"), "self,v:i64");
    assert_eq!(signature("hidden"), "self,v:bool");
    assert_eq!(signature("style"), "self,k:&str,v:&str");
    assert_eq!(signature("dataset"), "self,k:&str,v:implstd::fmt::Display");

    assert!(artifacts
        .builder
        .contents
        .contains("HtmlElement::new(\"img\", true)"));
}

#[test]
fn childless_element_smoke_test() {
    let el = image_like();
    let artifacts = render(&ElementTable::new(vec![el.clone()]), &Config::default()).unwrap();
    let tests = syn::parse_file(&artifacts.tests.contents).unwrap();

    let syn::Item::Fn(test) = &tests.items[1] else {
        panic!("expected a test function");
    };
    assert_eq!(test.sig.ident, "img");

    let calls: usize = el
        .attributes
        .iter()
        .map(|attr| match attr.kind {
            ValueKind::Bool | ValueKind::BoolForce | ValueKind::OnOff => 2,
            _ => 1,
        })
        .sum();

    let stmts: Vec<_> = test.block.stmts.iter().map(squash).collect();
    assert_eq!(stmts.len(), 1 + calls + 1);
    assert_eq!(stmts[0], "letelem=super::img();");
    assert_eq!(stmts.last().unwrap(), "let_=elem;");
    assert!(stmts.contains(&"letelem=elem.src(\"http://foo.com\");".to_string()));
    assert!(stmts.contains(&"letelem=elem.width(42_i64);".to_string()));
    assert!(stmts.contains(&"letelem=elem.style(\"color\",\"deepskyblue\");".to_string()));
}

#[test]
fn unknown_key_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let catalogs = Catalogs::builtin();
    let c = Composer::new(&catalogs);

    let result = (|| -> html_codegen::Result<_> {
        let attributes = c.global_attributes(c.html_attributes(&["src", "does-not-exist"])?)?;
        let el = ElementDescriptor::childless("Img", "defines an image.").attributes(attributes);
        let artifacts = render(&ElementTable::new(vec![el]), &config)?;
        artifacts.write(dir.path())
    })();

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Catalog(_)));
    assert!(err.to_string().contains("does-not-exist"));
    assert!(files(dir.path()).is_empty());
}

#[test]
fn invalid_runtime_path_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        runtime_path: "not a path".to_string(),
        ..config(dir.path())
    };

    assert!(matches!(run(&config), Err(Error::InvalidRuntimePath { .. })));
    assert!(files(dir.path()).is_empty());
}

#[test]
fn run_writes_both_files_and_check_detects_edits() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());

    run(&config).unwrap();
    assert_eq!(files(dir.path()), ["html_gen.rs", "html_gen_test.rs"]);

    let artifacts = generate(&config).unwrap();
    assert!(artifacts.stale(dir.path()).unwrap().is_empty());

    fs::write(config.builder_path(), "// stale\n").unwrap();
    assert_eq!(artifacts.stale(dir.path()).unwrap(), [config.builder_path()]);

    // a second run overwrites the edited file
    run(&config).unwrap();
    assert!(artifacts.stale(dir.path()).unwrap().is_empty());
}
