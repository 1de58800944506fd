//! `search` command handler.

use leadscout_places::{
    run_search, NormalizedRecord, PipelineOptions, PlacesClient, SearchRequest,
};

/// Runs the search pipeline and prints the records to stdout.
pub(crate) async fn run_search_command(
    config: &leadscout_core::AppConfig,
    request: &SearchRequest,
    as_json: bool,
) -> anyhow::Result<()> {
    let search = request.validate()?;
    let client = PlacesClient::from_config(config)?;
    let options = PipelineOptions::from_config(config);

    let records = run_search(&client, &search, &options).await?;
    tracing::debug!(count = records.len(), "search command finished");

    if as_json {
        let body = serde_json::json!({ "results": records });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{} result(s) for \"{}\"", records.len(), search.query);
    for record in &records {
        println!("{}", format_record_line(record));
    }
    Ok(())
}

/// One aligned line per record: name, phone, address.
pub(crate) fn format_record_line(record: &NormalizedRecord) -> String {
    let phone = record.phone.as_deref().unwrap_or("\u{2014}");
    format!("  {:<32} {:<18} {}", record.name, phone, record.address)
}
