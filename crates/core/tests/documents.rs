use punctual_core::{Educator, Options, Preset, PresetCache, Token, tokenize, transform};

const DOCUMENTS: &[&str] = &[
    "",
    "plain text",
    "Isn't this \"fun\"?",
    "<p>He said, \"'Quoted' words in a larger quote.\"</p>",
    "<ul>\n  <li>'90s -- \"hits\"...</li>\n  <li><a href=\"<MTFoo>\">x</a></li>\n</ul>",
    "<!-- \"comment\" --><?php echo \"--\"; ?><code>'a' -- b</code> tail's",
    "unterminated <a href=\"x> and <!-- open",
    "<pre>\n  \"keep\" --- me\n</pre>\n<p>but 'not' me</p>",
    "caf\u{e9} \u{201c}d\u{e9}j\u{e0} vu\u{201d} \u{2014} \u{a9} 2024",
];

#[test]
fn tokens_partition_every_document() {
    for doc in DOCUMENTS {
        let rebuilt: String = tokenize(doc).iter().map(Token::as_str).collect();
        assert_eq!(&rebuilt, doc);
    }
}

#[test]
fn do_nothing_is_identity() {
    for doc in DOCUMENTS {
        assert_eq!(transform(doc, Preset::DoNothing), *doc);
    }
}

#[test]
fn verbatim_content_survives_every_preset() {
    let inner = "\"x\" -- 'y'... ``z'' caf\u{e9}";
    let doc = format!("<p>'a'</p><code>{inner}</code><p>\"b\"</p>");
    for preset in Preset::ALL {
        let out = transform(&doc, preset);
        assert!(
            out.contains(&format!("<code>{inner}</code>")),
            "preset {preset} altered verbatim content: {out}"
        );
    }
}

#[test]
fn nested_verbatim_elements_end_at_first_close() {
    let out = transform("<pre><code>'a'</code>'b'</pre>'c'", Preset::Intl);
    assert_eq!(
        out,
        "<pre><code>'a'</code>&#8216;b&#8217;</pre>&#8216;c&#8217;"
    );
}

#[test]
fn old_school_triple_dash_is_a_single_em_dash() {
    let out = transform("a---b", Preset::LongEmDashShortEn);
    assert_eq!(out, "a&#8212;b");
    assert!(!out.contains('-'));
}

#[test]
fn inverted_dashes() {
    assert_eq!(
        transform("1---9 and so--on", Preset::ShortEmDashLongEn),
        "1&#8211;9 and so&#8212;on"
    );
}

#[test]
fn escapes_force_dumb_characters() {
    assert_eq!(
        transform(r#"\"dumb\" \-\- \`tick\`"#, Preset::Intl),
        "&#34;dumb&#34; &#45;&#45; &#96;tick&#96;"
    );
}

#[test]
fn stupefy_round_trips_em_dash_preset() {
    let inputs = [
        "\"Hello,\" she said -- 'it's fine'... ok?",
        "<p>The '80s were \"rad\" -- mostly.</p>",
        "No punctuation at all",
    ];
    let cache = PresetCache::new();
    assert_eq!(
        cache.transform(inputs[0], Preset::EmDash),
        "&#8220;Hello,&#8221; she said &#8212; &#8216;it&#8217;s fine&#8217;&#8230; ok?"
    );
    for input in inputs {
        let educated = cache.transform(input, Preset::EmDash);
        assert_eq!(cache.transform(&educated, Preset::Stupefy), input);
    }
}

#[test]
fn option_letters_and_presets_agree() {
    let letters = Educator::new(Options::parse("qbDe"));
    let preset = Educator::from_preset(Preset::LongEmDashShortEn);
    let doc = "<p>\"Well\" -- ``fine''... ---</p>";
    assert_eq!(letters.transform(doc), preset.transform(doc));
}

#[test]
fn full_document_snapshot() {
    let doc = "<h1>\"Smart\" quotes</h1>\n<p>It's the '90s -- isn't it... right?</p>\n<pre>\"left\" -- alone</pre>";
    let out = transform(doc, Preset::Intl);
    insta::assert_snapshot!(out, @r#"
    <h1>&#8220;Smart&#8221; quotes</h1>
    <p>It&#8217;s the &#8217;90s &#8211; isn&#8217;t it&#8230; right?</p>
    <pre>"left" -- alone</pre>
    "#);
}

#[test]
fn quotes_split_by_inline_markup_snapshot() {
    let doc = "<p><b>\"</b>Hello<b>\"</b> and <i>Custer</i>'s</p>";
    let out = transform(doc, Preset::EmDash);
    insta::assert_snapshot!(out, @"<p><b>&#8220;</b>Hello<b>&#8221;</b> and <i>Custer</i>&#8217;s</p>");
}
