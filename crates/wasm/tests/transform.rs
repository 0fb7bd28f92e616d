use punctual_wasm::{WasmEducator, tokenize, transform};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    preset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attr: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skip_tags: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    decode_glyphs: Option<bool>,
}

#[derive(Deserialize, Debug)]
struct TokenEntry {
    kind: String,
    value: String,
}

fn config(config: Config) -> JsValue {
    serde_wasm_bindgen::to_value(&config).expect("serialize config")
}

#[wasm_bindgen_test]
fn transform_with_default_preset() {
    let out = transform("Isn't this \"fun\"?", JsValue::UNDEFINED).expect("transform");
    assert_eq!(out, "Isn&#8217;t this &#8220;fun&#8221;?");
}

#[wasm_bindgen_test]
fn transform_with_preset_and_letters() {
    let out = transform(
        "a -- b",
        config(Config {
            preset: Some(1),
            ..Default::default()
        }),
    )
    .expect("transform");
    assert_eq!(out, "a &#8212; b");

    let out = transform(
        "\"a\"... -- b",
        config(Config {
            attr: Some("e"),
            ..Default::default()
        }),
    )
    .expect("transform");
    assert_eq!(out, "\"a\"&#8230; -- b");
}

#[wasm_bindgen_test]
fn transform_honours_skip_tags_and_decoding() {
    let out = transform(
        "<var>'x'</var> 'y'",
        config(Config {
            preset: Some(1),
            skip_tags: Some("var"),
            decode_glyphs: Some(true),
            ..Default::default()
        }),
    )
    .expect("transform");
    assert_eq!(out, "<var>'x'</var> \u{2018}y\u{2019}");
}

#[wasm_bindgen_test]
fn transform_rejects_unknown_preset() {
    let result = transform(
        "x",
        config(Config {
            preset: Some(42),
            ..Default::default()
        }),
    );
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn tokenize_returns_kinds_and_values() {
    let tokens = tokenize("<p>Hi</p>").expect("tokenize");
    let tokens: Vec<TokenEntry> = serde_wasm_bindgen::from_value(tokens).expect("deserialize");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, "tag");
    assert_eq!(tokens[1].kind, "text");
    assert_eq!(tokens[1].value, "Hi");
}

#[wasm_bindgen_test]
fn educator_class_is_reusable() {
    let educator = WasmEducator::new(config(Config {
        preset: Some(-1),
        ..Default::default()
    }))
    .expect("educator");
    assert_eq!(educator.transform("&#8216;a&#8217;"), "'a'");
    assert_eq!(educator.transform("b &#8212; c"), "b -- c");
}
