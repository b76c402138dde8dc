use certfolio_core::store::CertificationSource;

use crate::commands::common::{
    certification_to_list_item, fetch_certifications, format_certification_lines,
    CertificationListItem,
};
use crate::error::CliError;

pub async fn run_list<S: CertificationSource>(source: &S, as_json: bool) -> Result<(), CliError> {
    let certifications = fetch_certifications(source).await?;

    if as_json {
        let json_items = certifications
            .iter()
            .map(certification_to_list_item)
            .collect::<Vec<CertificationListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if certifications.is_empty() {
        println!("No certifications available");
    } else {
        for line in format_certification_lines(&certifications) {
            println!("{line}");
        }
    }

    Ok(())
}
