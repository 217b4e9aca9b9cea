//! Elfa catalogue: social-mention analytics

use super::types::{Field, Kind, Operation};

const PAGE: Field = Field::query("page", Kind::Integer)
    .default_int(1)
    .doc("Page number for pagination");

pub const OPERATIONS: &[Operation] = &[
    Operation::get(
        "get_mentions",
        "/mentions",
        "GET /v1/mentions - tweets by smart accounts with at least 10 other smart interactions",
        &[
            Field::query("limit", Kind::Integer)
                .default_int(100)
                .doc("Number of results to return"),
            Field::query("offset", Kind::Integer)
                .default_int(0)
                .doc("Number of results to skip"),
        ],
    ),
    Operation::get(
        "get_top_mentions",
        "/top-mentions",
        "GET /v1/top-mentions - tweets that mentioned a ticker, ranked by view count",
        &[
            Field::query("ticker", Kind::String)
                .required()
                .doc("Ticker symbol; prefixing with $ only returns cashtag matches"),
            Field::query("timeWindow", Kind::String)
                .default_str("1h")
                .doc("Time window for mentions (e.g. \"1h\", \"24h\", \"7d\")"),
            PAGE,
            Field::query("pageSize", Kind::Integer)
                .default_int(10)
                .doc("Number of items per page"),
            Field::query("includeAccountDetails", Kind::Boolean)
                .default_bool(false)
                .doc("Include account details"),
        ],
    ),
    Operation::get(
        "search_mentions",
        "/mentions/search",
        "GET /v1/mentions/search - tweets mentioning up to 5 keywords within a 30-day window",
        &[
            Field::query("keywords", Kind::String)
                .required()
                .doc("Up to 5 keywords, comma-separated; phrases accepted"),
            Field::query("from_", Kind::Integer)
                .required()
                .wire("from")
                .doc("Start date (unix timestamp)"),
            Field::query("to", Kind::Integer)
                .required()
                .doc("End date (unix timestamp)"),
            Field::query("limit", Kind::Integer)
                .default_int(20)
                .doc("Number of results to return (max 30)"),
            Field::query("searchType", Kind::String)
                .non_empty()
                .doc("Type of search (and, or)"),
            Field::query("cursor", Kind::String)
                .non_empty()
                .doc("Cursor for pagination, expires after 10 seconds"),
        ],
    ),
    Operation::get(
        "get_social_trending_tokens",
        "/trending-tokens",
        "GET /v1/trending-tokens - tokens most discussed in a time period",
        &[
            Field::query("timeWindow", Kind::String)
                .default_str("24h")
                .doc("Time window for trending analysis"),
            PAGE,
            Field::query("pageSize", Kind::Integer)
                .default_int(50)
                .doc("Number of items per page"),
            Field::query("minMentions", Kind::Integer)
                .default_int(5)
                .doc("Minimum number of mentions required"),
        ],
    ),
    Operation::get(
        "get_smart_account_stats",
        "/account/smart-stats",
        "GET /v1/account/smart-stats - smart stats and social metrics for a username",
        &[Field::query("username", Kind::String)
            .required()
            .doc("Twitter username to get stats for")],
    ),
];
