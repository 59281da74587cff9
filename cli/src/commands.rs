use anyhow::{bail, Context, Result};
use serde_json::Value;
use solr_client::query::{Add, Collapse, Optimize, SelectQuery, UpdateQuery};
use solr_client::{Client, ClientConfig};

use crate::argparse::{Cli, Commands, SelectArgs, UpdateArgs};

pub fn handle_command(cli: Cli) -> Result<()> {
    let config = match (&cli.base_url, &cli.config) {
        (Some(url), _) => ClientConfig::new(url.as_str()),
        (None, Some(path)) => ClientConfig::load(path)?,
        (None, None) => ClientConfig::from_env().context("Pass --base-url or set SOLR_URL")?,
    };
    let client = Client::new(config)?;

    let response = match cli.command {
        Commands::Select(args) => client.select(build_select(args)?)?,
        Commands::Update(args) => client.update(build_update(args)?)?,
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn build_select(args: SelectArgs) -> Result<SelectQuery> {
    let mut query = SelectQuery::create()
        .query(args.query)
        .filter(args.filters)
        .fields(args.fields);
    if let Some(field) = args.collapse {
        query = query.with_filter(Collapse::create(&field)?);
    }
    if let Some(sort) = args.sort {
        query = query.sort(sort);
    }
    if let Some(offset) = args.offset {
        query = query.offset(offset);
    }
    if let Some(limit) = args.limit {
        query = query.limit(limit);
    }
    Ok(query)
}

fn build_update(args: UpdateArgs) -> Result<UpdateQuery> {
    let mut update = UpdateQuery::create();

    if !args.delete_ids.is_empty() {
        update = update.delete_by_ids(args.delete_ids);
    }
    if let Some(query) = args.delete_query {
        update = update.delete_by_query(SelectQuery::create().query(query));
    }
    for document in &args.documents {
        let value: Value = serde_json::from_str(document)
            .with_context(|| format!("Invalid JSON document: {}", document))?;
        let mut add = Add::create(&value)?;
        if let Some(ms) = args.commit_within {
            add = add.commit_within(ms);
        }
        update = update.add_command(add);
    }
    if args.optimize {
        update = update.optimize(Optimize::new());
    }
    if args.commit {
        update = update.commit();
    }

    if update.is_empty() {
        bail!("Nothing to do: pass --add, --delete-id, --delete-query, --optimize or --commit");
    }
    tracing::info!("Sending update: {}", update.command_names().join(", "));
    Ok(update)
}
