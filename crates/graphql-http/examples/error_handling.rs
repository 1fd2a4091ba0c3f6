use serde_json::Value;

use graphql_http::{GraphqlClient, GraphqlClientError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let endpoint = "https://countries.trevorblades.com/";

    // "nam" is not a field; the server answers with an errors array.
    let query = r#"
        {
          country(code: "BR") {
            nam
          }
        }
    "#;

    let client = GraphqlClient::new(endpoint);
    match client.request::<Value, Value>(query, None).await {
        Ok(data) => println!("{}", serde_json::to_string_pretty(&data)?),
        Err(GraphqlClientError::Response(err)) => {
            eprintln!("request failed: {}", err.message);
            eprintln!("status: {}", err.response.status);
            eprintln!("body: {}", serde_json::to_string_pretty(&err.response.body)?);
            eprintln!("request: {}", serde_json::to_string_pretty(&err.request)?);
            std::process::exit(1);
        }
        Err(other) => return Err(other.into()),
    }
    Ok(())
}
