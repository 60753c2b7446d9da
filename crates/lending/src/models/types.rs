/// Provider identifier, also the registry key (e.g. "compound", "tezos-baking").
pub type ProviderId = String;
