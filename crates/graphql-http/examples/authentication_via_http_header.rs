use serde_json::Value;

use graphql_http::GraphqlClientBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let endpoint = "https://api.example.com/graphql";

    let client = GraphqlClientBuilder::new(endpoint)
        .with_bearer_token("MY_TOKEN")
        .build();

    let query = r"
        {
          viewer {
            id
            name
          }
        }
    ";

    let data: Value = client.request(query, None::<Value>).await?;
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
