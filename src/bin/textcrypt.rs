// src/bin/textcrypt.rs
//! textcrypt CLI: encrypt/decrypt short texts, generate secrets and passwords

use anyhow::{bail, Context, Result};
use rpassword::prompt_password;
use std::io::Write;
use textcrypt::{decrypt, encrypt, generate_iv, generate_password, generate_secret};
use textcrypt::{load_config, Algorithm};
use tracing::info;

const USAGE: &str = "\
usage: textcrypt [-a des|tripledes|aes] <command> [args]

commands:
  encrypt <text>         encrypt text, prompts for secret and IV
  decrypt <cipher-text>  decrypt base-64 text, prompts for secret and IV
  secret                 print a fresh secret (and IV) for the algorithm
  password [length]      print a password using the configured special chars";

fn main() -> Result<()> {
    textcrypt::logging::init();

    let config = load_config().context("Failed to load configuration")?;
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let algorithm = take_algorithm(&mut args)?.unwrap_or(config.cipher.default_algorithm);

    match args.first().map(String::as_str) {
        Some("encrypt") => {
            let text = positional(&args, "text")?;
            let (secret, iv) = prompt_key_material(algorithm)?;
            println!("{}", encrypt(algorithm, text, &secret, iv.as_deref())?);
        }
        Some("decrypt") => {
            let cipher_text = positional(&args, "cipher-text")?;
            let (secret, iv) = prompt_key_material(algorithm)?;
            println!("{}", decrypt(algorithm, cipher_text, &secret, iv.as_deref())?);
        }
        Some("secret") => {
            info!("Generating {algorithm} key material");
            println!("secret: {}", generate_secret(algorithm)?);
            if let Some(iv) = generate_iv(algorithm)? {
                println!("iv:     {iv}");
            }
        }
        Some("password") => {
            let mut settings = config.random.clone();
            if let Some(len) = args.get(1) {
                settings.password_length = len
                    .parse()
                    .with_context(|| format!("password length must be a number, got '{len}'"))?;
            }
            println!("{}", generate_password(&settings)?);
        }
        Some(other) => bail!("unknown command '{other}'\n\n{USAGE}"),
        None => println!("{USAGE}"),
    }

    Ok(())
}

/// Remove `-a <name>` / `--algorithm <name>` from `args`
fn take_algorithm(args: &mut Vec<String>) -> Result<Option<Algorithm>> {
    let Some(pos) = args.iter().position(|a| a == "-a" || a == "--algorithm") else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        bail!("{} needs an algorithm name", args[pos]);
    }
    let name = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(name.parse()?))
}

fn positional<'a>(args: &'a [String], what: &str) -> Result<&'a str> {
    args.get(1)
        .map(String::as_str)
        .with_context(|| format!("missing <{what}>\n\n{USAGE}"))
}

fn prompt_key_material(algorithm: Algorithm) -> Result<(String, Option<String>)> {
    let secret = prompt_password(format!("{algorithm} secret: "))?;

    if !algorithm.spec().mode.uses_iv() {
        return Ok((secret, None));
    }

    print!("{algorithm} IV: ");
    std::io::stdout().flush()?;
    let mut iv = String::new();
    std::io::stdin().read_line(&mut iv)?;
    Ok((secret, Some(iv.trim_end_matches(['\r', '\n']).to_owned())))
}
