//! Codex catalogue
//!
//! A single GraphQL operation against `https://graph.codex.io/graphql`.
//! Results are always ranked by 24h volume, descending.

use serde_json::{json, Map, Value};

use super::types::{Field, Kind, ListEncoding, Operation};

const FILTER_TOKENS: &str = r#"
query FilterTokens($filters: TokenFilters, $phrase: String, $tokens: [String], $excludeTokens: [String], $limit: Int, $offset: Int, $statsType: TokenPairStatisticsType, $rankings: [TokenRanking]) {
  filterTokens(
    filters: $filters
    phrase: $phrase
    tokens: $tokens
    excludeTokens: $excludeTokens
    limit: $limit
    offset: $offset
    statsType: $statsType
    rankings: $rankings
  ) {
    count
    page
    results {
      buyCount1
      buyCount4
      buyCount24
      high1
      high24
      txnCount1
      txnCount24
      uniqueTransactions1
      uniqueTransactions24
      volume1
      volume24
      liquidity
      marketCap
      priceUSD
      pair {
        token0
        token1
      }
      exchanges {
        name
      }
      token {
        address
        decimals
        name
        networkId
        symbol
        info {
          circulatingSupply
          totalSupply
        }
      }
    }
  }
}
"#;

/// `filters` is always sent (possibly empty) along with the fixed ranking
fn filter_tokens_fixed() -> Map<String, Value> {
    let mut variables = Map::new();
    variables.insert("filters".to_string(), json!({}));
    variables.insert(
        "rankings".to_string(),
        json!([{ "attribute": "volume24", "direction": "DESC" }]),
    );
    variables
}

const TOKEN_LIST: Kind = Kind::StringList(ListEncoding::Repeated);

pub const OPERATIONS: &[Operation] = &[Operation::graphql(
    "get_token_info",
    FILTER_TOKENS,
    filter_tokens_fixed,
    "Search for tokens by name, address or symbol, filtered by network IDs",
    &[
        Field::variable("phrase", Kind::String)
            .doc("Matches a token contract address or partially a token's name or symbol"),
        Field::variable("tokens", TOKEN_LIST)
            .doc("Token IDs (address:networkId) or addresses; leave blank to discover new tokens"),
        Field::variable("excludeTokens", TOKEN_LIST)
            .doc("Token IDs (address:networkId) to exclude from results"),
        Field::nested("filters", "network", Kind::IntegerList)
            .non_empty()
            .doc("Network IDs to filter tokens by (e.g. 1 Ethereum, 8453 Base, 1399811149 Solana)"),
        Field::variable("limit", Kind::Integer)
            .default_int(10)
            .doc("The maximum number of tokens to return"),
        Field::variable("offset", Kind::Integer)
            .default_int(0)
            .doc("Where in the list the server should start when returning items"),
        Field::variable("statsType", Kind::Enum(&["FILTERED", "UNFILTERED"]))
            .doc("The type of statistics returned"),
    ],
)];
