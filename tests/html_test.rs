use textsift::dom::{content_root, extract_html, parse};
use textsift::{join_text, Element, Options};

const STORY: &str = r#"<html>
<head><title>Harbour report</title></head>
<body>
  <nav><ul><li><a href="/">Home</a></li><li><a href="/news">News</a></li></ul></nav>
  <article>
    <h1>Harbour traffic rises</h1>
    <div class="share"><button>Share</button><button>Print</button></div>
    <div class="story">
      <p>The harbour authority published its annual report on Tuesday, showing a
      steady rise in container traffic and a sharp drop in average berthing delays.</p>
      <p>Officials credited the new scheduling system, which lets shipping lines book
      quay slots weeks in advance instead of queueing outside the breakwater.</p>
    </div>
    <div class="meta"><span>Filed under</span> <a href="/t/ports">Ports</a></div>
  </article>
  <footer>Copyright 2024 Harbour Gazette</footer>
</body>
</html>"#;

#[test]
fn article_body_is_extracted_from_html() {
    let sequences = extract_html(STORY, &Options::default()).unwrap();
    assert_eq!(sequences.len(), 1);
    assert_eq!(sequences[0].len(), 2);

    let text = join_text(&sequences);
    assert!(text.starts_with("The harbour authority published"));
    assert!(text.contains("berthing delays.\n\nOfficials credited"));
    assert!(text.ends_with("outside the breakwater."));

    for furniture in ["Home", "Share", "Print", "Filed under", "Copyright"] {
        assert!(!text.contains(furniture), "unexpected {furniture:?} in output");
    }
}

#[test]
fn whitespace_between_tags_emits_nothing() {
    let html = "<html><body>\n  <div>\n    <span>\n    </span>\n  </div>\n</body></html>";
    let sequences = extract_html(html, &Options::default()).unwrap();
    assert!(sequences.is_empty());
}

#[test]
fn button_only_page_is_empty() {
    let html = "<html><body><div><button>OK</button></div></body></html>";
    let sequences = extract_html(html, &Options::default()).unwrap();
    assert!(sequences.is_empty());
}

#[test]
fn role_main_is_used_when_no_article() {
    let doc = parse(
        "<html><body><div role='navigation'>Menu</div>\
         <div role='main'><p>Body text</p></div></body></html>",
    );
    let root = content_root(&doc).unwrap();
    assert_eq!(root.tag(), "div");
    assert_eq!(root.children().len(), 1);
}

#[test]
fn html_and_options_from_json_work_together() {
    let options = Options::from_json(r#"{ "acceptance_threshold": 0.0 }"#).unwrap();
    let html = "<html><body><main><p>Short note here.</p></main></body></html>";

    assert!(extract_html(html, &Options::default()).unwrap().is_empty());
    assert_eq!(extract_html(html, &options).unwrap().len(), 1);
}

#[test]
fn text_after_the_chosen_container_is_not_extracted() {
    let html = "<html><body><article><p>The river authority reopened the towpath on Friday after \
        repairs to the flood wall that had kept walkers and cyclists away for most of the winter.</p>\
        </article>Sign up for our newsletter today and never miss a story\
        <footer>Copyright 2024</footer></body></html>";

    let sequences = extract_html(html, &Options::default()).unwrap();
    assert_eq!(sequences.len(), 1);
    assert_eq!(sequences[0].tags().into_iter().collect::<Vec<_>>(), vec!["p"]);

    let text = join_text(&sequences);
    assert!(text.starts_with("The river authority"));
    assert!(!text.contains("newsletter"));
}
