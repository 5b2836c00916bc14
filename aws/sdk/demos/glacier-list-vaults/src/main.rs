/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::credential::EnvironmentVariableCredentialsProvider;
use aws_types::region::{EnvironmentProvider, ProvideRegion};
use glacier::{Client, Config, Region};
use structopt::StructOpt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, StructOpt)]
struct Opt {
    /// Region to list vaults in. Defaults to `AWS_REGION`, then us-west-2.
    #[structopt(short, long)]
    region: Option<String>,

    /// Account owning the vaults. `-` is the account of the credentials.
    #[structopt(short, long, default_value = "-")]
    account_id: String,

    /// Vaults requested per page
    #[structopt(short, long)]
    limit: Option<i32>,

    #[structopt(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let opt = Opt::from_args();

    if opt.verbose {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".into()),
            ))
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let region = opt
        .region
        .map(Region::new)
        .or_else(|| EnvironmentProvider::new().region())
        .unwrap_or_else(|| Region::new("us-west-2"));
    if opt.verbose {
        println!("glacier client version: {}", glacier::PKG_VERSION);
        println!("Region: {:?}", region);
    }

    let conf = Config::builder()
        .region(region)
        .credentials_provider(EnvironmentVariableCredentialsProvider::new())
        .app_name("glacier-list-vaults")
        .build();
    let client = Client::from_conf(conf);

    let mut marker = None;
    let mut found = 0;
    loop {
        let page = client
            .list_vaults()
            .account_id(opt.account_id.as_str())
            .set_limit(opt.limit)
            .set_marker(marker.take())
            .send()
            .await;
        let page = match page {
            Ok(page) => page,
            Err(err) => {
                eprintln!("failed to list vaults: {}", err);
                std::process::exit(1);
            }
        };
        for vault in page.vault_list.unwrap_or_default() {
            found += 1;
            println!(
                "{}\t{} archives\t{} bytes",
                vault.vault_name.unwrap_or_default(),
                vault.number_of_archives.unwrap_or_default(),
                vault.size_in_bytes.unwrap_or_default(),
            );
        }
        match page.marker {
            Some(next) => marker = Some(next),
            None => break,
        }
    }
    println!("Found {} vaults.", found);
}
