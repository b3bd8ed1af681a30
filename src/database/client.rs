// file: src/database/client.rs
// description: LanceDB client wrapper for reading the section corpus
// reference: https://docs.rs/lancedb

use crate::config::CorpusConfig;
use crate::error::{PipelineError, Result};
use crate::models::{Corpus, CorpusEntry};
use arrow_array::{Array, FixedSizeListArray, Float32Array, RecordBatch, StringArray};
use arrow_schema::DataType;
use futures::StreamExt;
use lancedb::query::ExecutableQuery;
use lancedb::{Connection, Table, connect};
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct LanceDbClient {
    connection: Connection,
    config: CorpusConfig,
}

impl LanceDbClient {
    pub async fn new(config: CorpusConfig) -> Result<Self> {
        info!("Connecting to LanceDB at {}", config.lancedb_uri);

        let connection = connect(&config.lancedb_uri)
            .execute()
            .await
            .map_err(|e| PipelineError::Database(format!("Failed to connect to LanceDB: {}", e)))?;

        Ok(Self { connection, config })
    }

    pub fn get_connection(&self) -> &Connection {
        &self.connection
    }

    pub async fn table_exists(&self, table_name: &str) -> Result<bool> {
        let table_names = self
            .connection
            .table_names()
            .execute()
            .await
            .map_err(|e| PipelineError::Database(format!("Failed to list tables: {}", e)))?;

        Ok(table_names.iter().any(|name| name == table_name))
    }

    pub async fn get_table(&self, table_name: &str) -> Result<Table> {
        self.connection
            .open_table(table_name)
            .execute()
            .await
            .map_err(|e| {
                PipelineError::Database(format!("Failed to open table {}: {}", table_name, e))
            })
    }

    /// Read every row of the configured table, in storage order.
    ///
    /// The table needs a fixed-size float vector column plus `source_file`
    /// and `text` string columns; a nullable `title` column is optional.
    /// A missing table loads as an empty corpus.
    pub async fn load_corpus(&self) -> Result<Corpus> {
        let table_name = &self.config.table_name;

        if !self.table_exists(table_name).await? {
            warn!("Table '{}' does not exist, corpus is empty", table_name);
            return Ok(Corpus::default());
        }

        let table = self.get_table(table_name).await?;
        self.check_vector_column(&table).await?;

        let mut stream = table
            .query()
            .execute()
            .await
            .map_err(|e| PipelineError::Database(format!("Corpus scan failed: {}", e)))?;

        let mut entries = Vec::new();
        while let Some(batch_result) = stream.next().await {
            let batch = batch_result.map_err(|e| {
                PipelineError::Database(format!("Failed to read result batch: {}", e))
            })?;
            entries.extend(self.batch_to_entries(&batch)?);
        }

        info!("Loaded {} sections from table '{}'", entries.len(), table_name);
        Ok(Corpus::new(entries))
    }

    async fn check_vector_column(&self, table: &Table) -> Result<()> {
        let schema = table
            .schema()
            .await
            .map_err(|e| PipelineError::Database(format!("Failed to read schema: {}", e)))?;

        let field = schema
            .field_with_name(&self.config.vector_column)
            .map_err(|_| {
                PipelineError::Corpus(format!(
                    "Missing vector column '{}'",
                    self.config.vector_column
                ))
            })?;

        match field.data_type() {
            DataType::FixedSizeList(item, dim) if item.data_type() == &DataType::Float32 => {
                debug!("Vector column '{}' has dimension {}", field.name(), dim);
                Ok(())
            }
            other => Err(PipelineError::Corpus(format!(
                "Vector column '{}' has unsupported type {}",
                field.name(),
                other
            ))),
        }
    }

    fn batch_to_entries(&self, batch: &RecordBatch) -> Result<Vec<CorpusEntry>> {
        let vectors = batch
            .column_by_name(&self.config.vector_column)
            .and_then(|col| col.as_any().downcast_ref::<FixedSizeListArray>())
            .ok_or_else(|| {
                PipelineError::Corpus(format!(
                    "Invalid '{}' column type",
                    self.config.vector_column
                ))
            })?;
        let sources = string_column(batch, "source_file")?;
        let texts = string_column(batch, "text")?;
        let titles = batch
            .column_by_name("title")
            .and_then(|col| col.as_any().downcast_ref::<StringArray>());

        let mut entries = Vec::with_capacity(batch.num_rows());
        for i in 0..batch.num_rows() {
            let values = vectors.value(i);
            let vector = values
                .as_any()
                .downcast_ref::<Float32Array>()
                .ok_or_else(|| {
                    PipelineError::Corpus("Vector items must be Float32".to_string())
                })?
                .values()
                .to_vec();

            let title = titles
                .filter(|t| !t.is_null(i))
                .map(|t| t.value(i).to_string());

            entries.push(CorpusEntry {
                vector,
                source_file: sources.value(i).to_string(),
                text: texts.value(i).to_string(),
                title,
            });
        }

        Ok(entries)
    }
}

fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray> {
    batch
        .column_by_name(name)
        .ok_or_else(|| PipelineError::Corpus(format!("Missing '{}' column", name)))?
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| PipelineError::Corpus(format!("Invalid '{}' column type", name)))
}
