//! End-to-end behavior on a realistic scene document.

use folio_content::markdown::ExportOptions;
use folio_content::{
    export_scene_to_markdown, export_scene_to_markdown_with_options, export_scenes_to_markdown,
    parse_markdown_to_scene, parse_markdown_to_scenes, validate_markdown_format, ParseErrorKind,
};
use folio_core::Scene;

use crate::common::{CACHING_STRATEGY, NO_CONTEXT};

fn caching_scene() -> Scene {
    parse_markdown_to_scene(CACHING_STRATEGY).expect("fixture should parse")
}

// ----------------------------------------------------------------------------
// Parsing
// ----------------------------------------------------------------------------

#[test]
fn test_caching_scene_metadata() {
    let scene = caching_scene();
    assert_eq!(scene.title, "Caching Strategy");
    assert_eq!(scene.category, "Performance");
    assert_eq!(scene.tags, vec!["caching", "http", "react-query"]);
    assert!(scene.context.starts_with("The dashboard fires"));
    assert!(scene.context.ends_with("once a minute."));
    assert_eq!(scene.solutions.len(), 2);
}

#[test]
fn test_caching_first_solution() {
    let scene = caching_scene();
    let solution = &scene.solutions[0];

    assert_eq!(
        solution.problem,
        "Identical requests are sent in parallel on every page load."
    );
    assert_eq!(
        solution.approach,
        "Cache responses by request key and share in-flight promises.\nExpire entries after a fixed time-to-live."
    );

    let titles: Vec<_> = solution.key_points.iter().map(|k| k.title.as_str()).collect();
    assert_eq!(titles, vec!["Request deduplication", "TTL", "Invalidate on write"]);
    assert_eq!(solution.key_points[0].tags, vec!["network", "dedupe"]);
    let trade_offs = solution.key_points[1].trade_offs.as_ref().unwrap();
    assert_eq!(trade_offs["freshness"], "lower");
    assert_eq!(trade_offs["latency"], "much lower");
    assert_eq!(solution.key_points[2].description, "Invalidate on write");

    let code = solution.code_demo.as_deref().unwrap();
    assert!(code.starts_with("const cache = new Map"));
    assert!(code.ends_with("return cache.get(url)!;\n}"));
    assert!(solution.auto_generated);
    assert_eq!(solution.generator.as_deref(), Some("template"));
}

#[test]
fn test_caching_second_solution() {
    let scene = caching_scene();
    let solution = &scene.solutions[1];
    assert!(solution.code_demo.is_none());
    assert!(!solution.auto_generated);
    assert_eq!(solution.key_points[0].title, "Cache-Control");
    assert_eq!(
        solution.key_points[0].description,
        "max-age=60 lets the browser skip the request"
    );
}

#[test]
fn test_caching_scene_passes_precheck() {
    let report = validate_markdown_format(CACHING_STRATEGY);
    assert!(report.valid, "unexpected errors: {:?}", report.errors);
}

#[test]
fn test_ids_are_unique() {
    let scene = caching_scene();
    let mut ids = vec![scene.id.clone()];
    for solution in &scene.solutions {
        ids.push(solution.id.clone());
        ids.extend(solution.key_points.iter().map(|k| k.id.clone()));
    }
    let count = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), count);
}

// ----------------------------------------------------------------------------
// Round trip
// ----------------------------------------------------------------------------

fn assert_same_content(a: &Scene, b: &Scene) {
    assert_eq!(a.title, b.title);
    assert_eq!(a.context, b.context);
    assert_eq!(a.category, b.category);
    assert_eq!(a.tags, b.tags);
    assert_eq!(a.solutions.len(), b.solutions.len());
    for (x, y) in a.solutions.iter().zip(&b.solutions) {
        assert_eq!(x.problem, y.problem);
        assert_eq!(x.approach, y.approach);
        assert_eq!(x.code_demo, y.code_demo);
        assert_eq!(x.auto_generated, y.auto_generated);
        assert_eq!(x.generator, y.generator);
        assert_eq!(x.key_points.len(), y.key_points.len());
        for (p, q) in x.key_points.iter().zip(&y.key_points) {
            assert_eq!(p.title, q.title);
            assert_eq!(p.description, q.description);
            assert_eq!(p.tags, q.tags);
            assert_eq!(p.trade_offs, q.trade_offs);
        }
    }
}

#[test]
fn test_caching_scene_round_trips() {
    let scene = caching_scene();
    let exported = export_scene_to_markdown(&scene);
    let reparsed = parse_markdown_to_scene(&exported).unwrap();
    assert_same_content(&scene, &reparsed);
    assert_ne!(scene.id, reparsed.id);
}

#[test]
fn test_round_trip_with_custom_options() {
    let scene = caching_scene();
    let options = ExportOptions {
        code_language: "typescript".to_string(),
        solution_title_max_chars: 10,
    };
    let exported = export_scene_to_markdown_with_options(&scene, &options);
    assert!(exported.contains("```typescript\n"));
    assert!(exported.contains("## Solution: Identical\n"));
    assert_same_content(&scene, &parse_markdown_to_scene(&exported).unwrap());
}

#[test]
fn test_batch_round_trip() {
    let first = caching_scene();
    let second = parse_markdown_to_scene(&CACHING_STRATEGY.replace("Caching Strategy", "Second"))
        .unwrap();
    let batch = export_scenes_to_markdown(&[first.clone(), second.clone()]);

    let parsed = parse_markdown_to_scenes(&batch).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_same_content(&first, &parsed[0]);
    assert_same_content(&second, &parsed[1]);
}

// ----------------------------------------------------------------------------
// Failures
// ----------------------------------------------------------------------------

#[test]
fn test_missing_context_document() {
    let err = parse_markdown_to_scene(NO_CONTEXT).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::MissingContext);
    assert_eq!(err.section(), "context");
    assert_eq!(err.line(), Some(2));

    let report = validate_markdown_format(NO_CONTEXT);
    assert_eq!(
        report.errors,
        vec!["Missing Context section. Expected \"## Context\""]
    );
}
