use anyhow::{Context, Result};

use crate::config::Config;
use crate::data::loader::{check_row_count, load_file};
use crate::data::model::PointCloud;
use crate::runner::run_renderer;

/// Run the renderer, then load what it wrote.
///
/// The data file is only read after the renderer exited successfully.
pub fn prepare(config: &Config) -> Result<PointCloud> {
    run_renderer(&config.renderer, &config.data_file)
        .with_context(|| format!("running renderer {}", config.renderer.display()))?;

    let cloud = load_file(&config.data_file)
        .with_context(|| format!("loading data file {}", config.data_file.display()))?;

    if let Some(expected) = config.expected_rows {
        check_row_count(&cloud, expected)
            .with_context(|| format!("validating {}", config.data_file.display()))?;
    }

    log::info!(
        "loaded {} points from {}",
        cloud.len(),
        config.data_file.display()
    );
    Ok(cloud)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::error::{DataError, RunnerError};
    use crate::runner::tests::script;

    fn config_in(dir: &std::path::Path, body: &str) -> Config {
        Config {
            renderer: script(dir, "render.sh", body),
            data_file: dir.join("data.txt"),
            expected_rows: None,
        }
    }

    #[test]
    fn runs_then_loads() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "printf '1 2 3\\n4 5 6\\n7 8 9\\n'");

        let cloud = prepare(&config).unwrap();
        assert_eq!(cloud.len(), 3);
        assert_eq!(cloud.points[2].z, 9.0);
    }

    #[test]
    fn failed_run_stops_before_loading() {
        let dir = tempfile::tempdir().unwrap();
        // Output that would parse fine if it were ever read.
        let config = config_in(dir.path(), "printf '1 2 3\\n'\nexit 1");

        let err = prepare(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RunnerError>(),
            Some(RunnerError::Exit { code: Some(1), .. })
        ));
        assert!(err.downcast_ref::<DataError>().is_none());
        assert!(format!("{err:#}").starts_with("running renderer"));
    }

    #[test]
    fn empty_output_is_a_data_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), "true");

        let err = prepare(&config).unwrap_err();
        assert!(matches!(err.downcast_ref::<DataError>(), Some(DataError::Empty)));
        assert!(format!("{err:#}").starts_with("loading data file"));
    }

    #[test]
    fn expected_row_count_is_enforced() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path(), "printf '1 2 3\\n4 5 6\\n'");
        config.expected_rows = Some(3);

        let err = prepare(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::RowCount { expected: 3, found: 2 })
        ));

        config.expected_rows = Some(2);
        assert_eq!(prepare(&config).unwrap().len(), 2);
    }
}
