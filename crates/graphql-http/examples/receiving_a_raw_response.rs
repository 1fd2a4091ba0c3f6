use serde_json::Value;

use graphql_http::{GraphqlClientConfig, raw_request};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let endpoint = "https://countries.trevorblades.com/";

    let query = r#"
        {
          country(code: "BR") {
            name
            capital
          }
        }
    "#;

    let response = raw_request(endpoint, query, None::<Value>, GraphqlClientConfig::default())
        .await?;

    println!("status: {}", response.status);
    for (name, value) in &response.headers {
        println!("header: {name}: {value:?}");
    }
    println!("data: {}", serde_json::to_string_pretty(&response.data)?);
    if let Some(extensions) = &response.extensions {
        println!("extensions: {}", serde_json::to_string_pretty(extensions)?);
    }
    Ok(())
}
