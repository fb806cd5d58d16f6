//! End-to-end dashboard behaviour against a fake storage backend.

mod common;

use common::FakeBackend;
use csv_dashboard::chart::{Rect, Rgba, TextAlign};
use csv_dashboard::{
    ChartOptions, ChartRenderer, CsvBackend, CsvParser, Dashboard, DrawingSurface, HttpBackend,
    RenderOutcome, Row, Scalar, SelectedFile, CHART_ELEMENT_ID,
};
use std::sync::atomic::Ordering;

const SALES_CSV: &str = "Label,Value,Region
January,120,North
February,95.5,South
March,,North
,40,East
April,0,West
May,210,
";

/// Counts bars drawn; clearing resets the count
#[derive(Default)]
struct CountingSurface {
    bars: usize,
    clears: usize,
}

impl DrawingSurface for CountingSurface {
    fn element_id(&self) -> &str {
        CHART_ELEMENT_ID
    }

    fn size(&self) -> (f64, f64) {
        (640.0, 320.0)
    }

    fn clear(&mut self) {
        self.bars = 0;
        self.clears += 1;
    }

    fn fill_rect(&mut self, _rect: &Rect, _color: &Rgba) {
        self.bars += 1;
    }

    fn stroke_rect(&mut self, _rect: &Rect, _color: &Rgba, _line_width: f64) {}

    fn line(&mut self, _from: (f64, f64), _to: (f64, f64), _color: &Rgba, _line_width: f64) {}

    fn text(&mut self, _text: &str, _x: f64, _y: f64, _align: TextAlign, _color: &Rgba) {}
}

async fn dashboard_for(backend: &FakeBackend) -> Dashboard<HttpBackend> {
    let mut dashboard = Dashboard::new(HttpBackend::new(backend.url.clone()));
    assert!(dashboard.load().await);
    dashboard
}

#[tokio::test]
async fn test_rows_without_label_or_value_stay_in_table_only() {
    let backend = FakeBackend::start().await;
    let mut dashboard = dashboard_for(&backend).await;

    let outcome = dashboard
        .handle_file_upload(Some(SelectedFile::new("sales.csv", SALES_CSV)))
        .await
        .unwrap();

    assert_eq!(outcome.row_count, 6);
    assert_eq!(outcome.chart_points, 3);

    let state = dashboard.state();
    assert_eq!(state.table().len(), 6);
    assert_eq!(state.series().labels(), &["January", "February", "May"]);
    assert_eq!(state.series().values(), &[120.0, 95.5, 210.0]);
    assert_eq!(state.series().labels().len(), state.series().values().len());
    assert_eq!(state.table_columns(), vec!["Label", "Value", "Region"]);
}

#[tokio::test]
async fn test_upload_then_select_round_trips_rows() {
    let backend = FakeBackend::start().await;
    let mut dashboard = dashboard_for(&backend).await;

    let original = CsvParser::new().parse_str(SALES_CSV).unwrap().rows;

    let outcome = dashboard
        .handle_file_upload(Some(SelectedFile::new("a.csv", SALES_CSV)))
        .await
        .unwrap();
    assert!(outcome.persisted);
    assert_eq!(dashboard.state().file_names(), vec!["a.csv"]);

    // Show something else first so the selection has to restore the rows
    dashboard
        .handle_file_upload(Some(SelectedFile::new("other.csv", "Label,Value\nx,1\n")))
        .await
        .unwrap();
    assert_eq!(dashboard.state().table().len(), 1);

    assert!(dashboard.handle_select_file("a.csv"));
    assert_eq!(dashboard.state().selected_file(), Some("a.csv"));
    assert_eq!(dashboard.state().table(), original.as_slice());
    assert_eq!(
        dashboard.state().table()[1].get("Value"),
        Some(&Scalar::Number(95.5))
    );
    assert_eq!(dashboard.state().table()[2].get("Value"), Some(&Scalar::Null));
}

#[tokio::test]
async fn test_failed_upload_leaves_file_list_unchanged() {
    let backend = FakeBackend::start().await;
    let mut dashboard = dashboard_for(&backend).await;

    dashboard
        .handle_file_upload(Some(SelectedFile::new("a.csv", "Label,Value\na,1\n")))
        .await
        .unwrap();
    let before = dashboard.state().uploaded_files().to_vec();

    backend.store.set(&backend.store.fail_uploads, true);
    let outcome = dashboard
        .handle_file_upload(Some(SelectedFile::new("b.csv", "Label,Value\nb,2\n")))
        .await
        .unwrap();

    assert!(!outcome.persisted);
    assert_eq!(backend.store.uploads.load(Ordering::SeqCst), 2);
    assert_eq!(dashboard.state().uploaded_files(), before.as_slice());
    assert_eq!(dashboard.state().file_names(), vec!["a.csv"]);
    assert!(!dashboard.handle_select_file("b.csv"));
}

#[tokio::test]
async fn test_reupload_same_name_overwrites() {
    let backend = FakeBackend::start().await;
    let mut dashboard = dashboard_for(&backend).await;

    dashboard
        .handle_file_upload(Some(SelectedFile::new("a.csv", "Label,Value\nold,1\n")))
        .await
        .unwrap();
    dashboard
        .handle_file_upload(Some(SelectedFile::new("a.csv", "Label,Value\nnew,2\nnewer,3\n")))
        .await
        .unwrap();

    assert_eq!(dashboard.state().file_names(), vec!["a.csv"]);
    assert_eq!(backend.store.files().len(), 1);

    assert!(dashboard.handle_select_file("a.csv"));
    assert_eq!(dashboard.state().series().labels(), &["new", "newer"]);
}

#[tokio::test]
async fn test_file_without_chart_rows_renders_empty_chart() {
    let backend = FakeBackend::start().await;
    let mut dashboard = dashboard_for(&backend).await;
    let mut renderer = ChartRenderer::new(CountingSurface::default(), ChartOptions::default());

    dashboard
        .handle_file_upload(Some(SelectedFile::new("bars.csv", "Label,Value\na,1\nb,2\n")))
        .await
        .unwrap();
    assert_eq!(renderer.render(dashboard.state().series()), RenderOutcome::Drawn);
    assert!(renderer.surface().bars > 0);

    dashboard
        .handle_file_upload(Some(SelectedFile::new(
            "names.csv",
            "Name,Count\nalpha,3\nbeta,4\n",
        )))
        .await
        .unwrap();

    assert!(dashboard.handle_select_file("names.csv"));
    assert_eq!(dashboard.state().table().len(), 2);
    assert!(dashboard.state().series().is_empty());

    assert_eq!(renderer.render(dashboard.state().series()), RenderOutcome::Cleared);
    assert_eq!(renderer.surface().bars, 0);
    assert_eq!(renderer.surface().clears, 1);
    assert!(renderer.active().is_none());
}

#[tokio::test]
async fn test_listing_failure_keeps_previous_list() {
    let backend = FakeBackend::start().await;
    let mut dashboard = dashboard_for(&backend).await;

    dashboard
        .handle_file_upload(Some(SelectedFile::new("a.csv", "Label,Value\na,1\n")))
        .await
        .unwrap();

    backend.store.set(&backend.store.fail_listing, true);
    let outcome = dashboard
        .handle_file_upload(Some(SelectedFile::new("b.csv", "Label,Value\nb,1\n")))
        .await
        .unwrap();

    // Stored remotely, but the refresh failed so the selector is stale
    assert!(!outcome.persisted);
    assert_eq!(backend.store.files().len(), 2);
    assert_eq!(dashboard.state().file_names(), vec!["a.csv"]);

    backend.store.set(&backend.store.fail_listing, false);
    assert!(dashboard.refresh_uploaded_files().await);
    assert_eq!(dashboard.state().file_names(), vec!["a.csv", "b.csv"]);
}

#[tokio::test]
async fn test_non_json_upload_response_skips_refresh() {
    let backend = FakeBackend::start().await;
    let mut dashboard = dashboard_for(&backend).await;

    backend.store.set(&backend.store.plain_text_uploads, true);
    let outcome = dashboard
        .handle_file_upload(Some(SelectedFile::new("a.csv", "Label,Value\na,1\n")))
        .await
        .unwrap();

    assert!(!outcome.persisted);
    assert!(dashboard.state().uploaded_files().is_empty());
}

#[tokio::test]
async fn test_initial_load_lists_existing_files() {
    let backend = FakeBackend::start().await;
    let client = HttpBackend::new(backend.url.clone());
    let rows = vec![Row::new().field("Label", "seed").field("Value", 1.0)];
    client.upload_file("existing.csv", &rows).await.unwrap();

    let dashboard = dashboard_for(&backend).await;
    assert_eq!(dashboard.state().file_names(), vec!["existing.csv"]);
}

#[tokio::test]
async fn test_extreme_values_render_without_panic() {
    let backend = FakeBackend::start().await;
    let mut dashboard = dashboard_for(&backend).await;
    let mut renderer = ChartRenderer::new(CountingSurface::default(), ChartOptions::default());

    let outcome = dashboard
        .handle_file_upload(Some(SelectedFile::new(
            "extreme.csv",
            "Label,Value\nbig,1e308\nsmall,-1e308\n",
        )))
        .await
        .unwrap();

    assert_eq!(outcome.chart_points, 2);
    assert_eq!(dashboard.state().series().values(), &[1e308, -1e308]);
    assert_eq!(renderer.render(dashboard.state().series()), RenderOutcome::Drawn);
    assert!(renderer.surface().bars > 0);
}
