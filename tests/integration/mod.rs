/// Integration test target: end-to-end store and persistence scenarios
mod store_scenarios;
