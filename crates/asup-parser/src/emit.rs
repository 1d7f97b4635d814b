//! CSV emission for the host-info and multipath tables.
//!
//! Row values are comma-free by construction; `csv::Writer` still quotes any
//! field carrying a quote or line break so every row stays on one record.

use std::path::Path;

use anyhow::{Context, anyhow};
use asup_log_tools::Aggregator;
use asup_protocol::{HOST_INFO_COLUMNS, MULTIPATH_COLUMNS};

/// Header record followed by one record per row, `\n`-terminated.
pub fn render<'a, const N: usize>(
    columns: &[&str; N],
    rows: impl IntoIterator<Item = [&'a str; N]>,
) -> anyhow::Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(columns)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow!("flushing CSV buffer: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

pub fn render_hosts(aggregator: &Aggregator) -> anyhow::Result<String> {
    render(&HOST_INFO_COLUMNS, aggregator.host_rows().map(|r| r.fields()))
}

pub fn render_multipath(aggregator: &Aggregator) -> anyhow::Result<String> {
    render(&MULTIPATH_COLUMNS, aggregator.multipath_rows().map(|r| r.fields()))
}

/// Write `contents` to `path`, creating missing parent directories.
pub async fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Write both tables.
pub async fn write_tables(
    aggregator: &Aggregator,
    host_csv: &Path,
    multipath_csv: &Path,
) -> anyhow::Result<()> {
    write_file(host_csv, &render_hosts(aggregator)?).await?;
    write_file(multipath_csv, &render_multipath(aggregator)?).await?;
    tracing::info!(
        host_csv = %host_csv.display(),
        host_rows = aggregator.host_count(),
        multipath_csv = %multipath_csv.display(),
        multipath_rows = aggregator.multipath_count(),
        "CSV tables written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use asup_log_tools::{ExtractOptions, mock, process_log};

    fn sample() -> Aggregator {
        let raw = mock::log_stream(&[
            mock::linux_payload("host-b", "HPE", "DL380, Gen10", "7.6"),
            mock::windows_payload("WIN-A", "HPE", "DL360", "10.0"),
        ]);
        let mut agg = Aggregator::new();
        process_log(&raw, &mut agg, &ExtractOptions::default()).unwrap();
        agg
    }

    #[test]
    fn empty_tables_have_headers_only() {
        let agg = Aggregator::new();
        assert_eq!(render_hosts(&agg).unwrap().lines().count(), 1);
        assert_eq!(
            render_multipath(&agg).unwrap(),
            "SystemOsName,RowType,SectionName,PropertyName,PropertyValue\n"
        );
    }

    #[test]
    fn host_table_has_eighteen_fields_per_line() {
        let csv = render_hosts(&sample()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("RowType,HaveHostInfo,"));
        assert!(lines.iter().all(|l| l.split(',').count() == 18));
    }

    #[test]
    fn multipath_table_has_five_fields_per_line() {
        let csv = render_multipath(&sample()).unwrap();
        assert_eq!(csv.lines().count(), 13);
        assert!(csv.lines().all(|l| l.split(',').count() == 5));
        assert!(csv.contains("host-b,multipath,devices,prio_args,alua_exclusive_pref_bit\n"));
    }

    #[test]
    fn quote_and_line_break_stay_in_one_record() {
        let payload = mock::linux_payload("host-a", "HPE", "DL380", "7.6").replace(
            r#"value="group_by_prio""#,
            r#"value="&quot;1 queue_if_no_path&quot;&#10;extra""#,
        );
        let mut agg = Aggregator::new();
        process_log(&mock::log_stream(&[payload]), &mut agg, &ExtractOptions::default()).unwrap();
        let out = render_multipath(&agg).unwrap();

        let records: Vec<csv::StringRecord> = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(out.as_bytes())
            .records()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 1 + agg.multipath_count());
        assert!(records.iter().all(|r| r.len() == 5));
        let policy = records
            .iter()
            .find(|r| &r[3] == "path_grouping_policy")
            .unwrap();
        assert_eq!(&policy[4], "\"1 queue_if_no_path\"\nextra");
        assert!(out.contains("path_grouping_policy,\"\"\"1 queue_if_no_path\"\"\nextra\"\n"));
    }

    #[tokio::test]
    async fn write_tables_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let hosts = dir.path().join("out/a/hi_phase1.csv");
        let multipath = dir.path().join("out/b/hi_phase1_multipath.csv");
        write_tables(&sample(), &hosts, &multipath).await.unwrap();
        assert_eq!(std::fs::read_to_string(&hosts).unwrap().lines().count(), 3);
        assert!(multipath.exists());
    }

    #[tokio::test]
    async fn write_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let result = write_file(&blocker.join("hi_phase1.csv"), "x").await;
        assert!(result.is_err());
    }
}
