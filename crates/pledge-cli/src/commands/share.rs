use anyhow::Result;

use pledge_core::share::ShareLinks;
use pledge_core::AppConfig;

/// Print the three share links for the configured campaign page.
pub fn run(config: &AppConfig) -> Result<()> {
    let links = ShareLinks::build(&config.campaign)?;

    println!("Twitter:   {}", links.twitter);
    println!("Facebook:  {}", links.facebook);
    println!("Email:     {}", links.email);

    Ok(())
}
