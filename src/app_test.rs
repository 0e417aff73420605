use super::*;

fn registry() -> RouteRegistry<PageFn> {
    build_registry().expect("application routes should register")
}

#[test]
fn build_registry_registers_site_routes_in_order() {
    let registry = registry();
    let patterns: Vec<&str> = registry.patterns().map(|p| p.as_str()).collect();
    assert_eq!(patterns, [CREATORS_ROUTE, PREVIEW_ROUTE, PROFILE_ROUTE]);
}

#[test]
fn page_bindings_read_variables_their_patterns_declare() {
    let registry = registry();
    let declared = |path: &str| -> Vec<String> {
        let resolved = registry.resolve(path).expect("route should resolve");
        resolved.pattern.param_names().map(str::to_owned).collect()
    };
    assert_eq!(declared("/preview/x"), [pages::preview::PROJECT_ID]);
    assert_eq!(declared("/profile/x"), [pages::profile::PROFILE_ID]);
    assert!(declared("/creators").is_empty());
}

#[test]
fn creators_renders_placeholder_with_empty_params() {
    let page = render_path(&registry(), "/creators");
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.html.contains("creators-page"));
    assert!(page.html.contains(r#"<script id="route-params" type="application/json">{}</script>"#));
}

#[test]
fn profile_forwards_profile_id_to_page() {
    let page = render_path(&registry(), "/profile/42");
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.html.contains("profile-page"));
    assert!(page.html.contains(r#"data-profile-id="42""#));
    assert!(page.html.contains(r#"{"profileId":"42"}"#));
}

#[test]
fn preview_forwards_project_id_to_page() {
    let page = render_path(&registry(), "/preview/abc");
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.html.contains(r#"data-project-id="abc""#));
    assert!(page.html.contains(r#"{"projectId":"abc"}"#));
}

#[test]
fn unmatched_path_renders_not_found_with_404() {
    let page = render_path(&registry(), "/missing");
    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert!(page.html.contains("not-found-page"));
    assert!(page.html.contains("/missing"));
    assert!(!page.html.contains("route-params"));
}

#[test]
fn rendered_page_is_a_full_document() {
    let page = render_path(&registry(), "/creators");
    assert!(page.html.starts_with("<!DOCTYPE html>"));
    assert!(page.html.contains("<title>Creator Portal</title>"));
    assert!(page.html.ends_with("</html>"));
}

#[test]
fn params_script_escapes_markup() {
    let params: RouteParams = [("profileId", "</script><b>")].into_iter().collect();
    let script = params_script(&params);
    assert!(!script.contains("</script><b>"));
    assert!(script.contains("\\u003c/script>\\u003cb>"));
}
