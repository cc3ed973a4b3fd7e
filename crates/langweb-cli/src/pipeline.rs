//! The four pipeline stages, each reading files and writing files.

use tracing::info;

use langweb_core::config::LangwebConfig;
use langweb_core::errors::PipelineError;
use langweb_graph::{cooccurrence, read_network_data, write_network_data, Classifier, NetworkBuilder};
use langweb_ingest::{merge, read_exchange, read_table, write_exchange, SurveyTable};
use langweb_render::{network_html, sankey_html, write_page, SankeyDiagram};

/// Stage 1: read the four survey tables and write the merged exchange file.
pub fn convert(config: &LangwebConfig) -> Result<(), PipelineError> {
    let delimiter = config.effective_csv_delimiter();
    let mut tables = Vec::new();
    for path in config.inputs.survey_tables() {
        tables.push(read_table(path, delimiter)?);
    }
    let merged = merge(&tables);
    write_exchange(&config.outputs.exchange, &merged)?;
    Ok(())
}

/// Stage 2: build the node/link graph from the exchange file and the raw
/// reference lists.
pub fn graph(config: &LangwebConfig) -> Result<(), PipelineError> {
    let delimiter = config.effective_csv_delimiter();
    let records = read_exchange(&config.outputs.exchange)?;
    let classifier = Classifier::from_files(
        &config.inputs.raw_interlocutors,
        &config.inputs.raw_media,
        &config.inputs.raw_places,
        &config.inputs.raw_situations,
        delimiter,
    )?;
    let data = NetworkBuilder::new(&classifier).build(&records)?;
    write_network_data(&config.outputs.network_data, &data)?;
    Ok(())
}

/// Stage 3: render the network page.
pub fn network(config: &LangwebConfig) -> Result<(), PipelineError> {
    let data = read_network_data(&config.outputs.network_data)?;
    write_page(&config.outputs.network_page, &network_html(&data))?;
    Ok(())
}

/// Stage 4: render the Sankey page, one diagram per survey table.
pub fn sankey(config: &LangwebConfig) -> Result<(), PipelineError> {
    let delimiter = config.effective_csv_delimiter();
    let read = |path| -> Result<SurveyTable, PipelineError> {
        Ok(read_table(path, delimiter)?)
    };

    let diagrams = vec![
        diagram("Interlocutors", "interlocutors", &read(&config.inputs.interlocutors)?)?,
        diagram("Places", "places", &read(&config.inputs.places)?)?,
        diagram("Situations", "situations", &read(&config.inputs.situations)?)?,
        diagram("Media", "media", &read(&config.inputs.media)?)?,
    ];
    write_page(&config.outputs.sankey_page, &sankey_html(&diagrams))?;
    Ok(())
}

/// All four stages in order.
pub fn run(config: &LangwebConfig) -> Result<(), PipelineError> {
    convert(config)?;
    graph(config)?;
    network(config)?;
    sankey(config)?;
    info!("pipeline complete");
    Ok(())
}

fn diagram(title: &str, anchor: &str, table: &SurveyTable) -> Result<SankeyDiagram, PipelineError> {
    let flows = cooccurrence(&table.records)?;
    Ok(SankeyDiagram::new(title, anchor, flows))
}
