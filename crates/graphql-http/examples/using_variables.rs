use serde_json::{Value, json};

use graphql_http::{GraphqlClientConfig, request};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let endpoint = "https://countries.trevorblades.com/";

    let query = r"
        query Country($code: ID!) {
          country(code: $code) {
            name
            capital
          }
        }
    ";

    let variables = json!({ "code": "BR" });

    let data: Value = request(endpoint, query, Some(variables), GraphqlClientConfig::default())
        .await?;
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
