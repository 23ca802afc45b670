// src/cli.rs
//! Command line flags.
//!
//! Every flag except `--my-config` may instead come from a config file or the
//! environment, so clap only enforces the config path. Required issuer values
//! are checked after all sources are merged (see `settings::loader`).

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "issuer-gen")]
#[command(about = "Generate the issuer identification file used to issue and validate certificates")]
#[command(version)]
pub struct Cli {
    /// Config file path
    #[arg(short = 'c', long = "my-config")]
    pub my_config: PathBuf,

    /// The issuer's blockchain address used to issue certificates
    #[arg(short = 'k', long = "issuer_address")]
    pub issuer_address: Option<String>,

    /// The issuer's blockchain address used to revoke certificates
    #[arg(short = 'r', long = "revocation_address")]
    pub revocation_address: Option<String>,

    /// The issuer's publicly accessible identification file, i.e. the URL of the file this tool generates
    #[arg(short = 'd', long = "issuer_id")]
    pub issuer_id: Option<String>,

    /// The issuer's main URL address
    #[arg(short = 'u', long = "issuer_url")]
    pub issuer_url: Option<String>,

    /// The issuer's URL address of the certificates
    #[arg(short = 'l', long = "issuer_certs_url")]
    pub issuer_certs_url: Option<String>,

    /// The issuer's name
    #[arg(short = 'n', long = "issuer_name")]
    pub issuer_name: Option<String>,

    /// The issuer's email
    #[arg(short = 'e', long = "issuer_email")]
    pub issuer_email: Option<String>,

    /// The issuer's logo image
    #[arg(short = 'm', long = "issuer_logo_file")]
    pub issuer_logo_file: Option<PathBuf>,

    /// The output file to save the issuer's identification file to (stdout when omitted)
    #[arg(short = 'o', long = "output_file")]
    pub output_file: Option<PathBuf>,
}
