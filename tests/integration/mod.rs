mod consumer_flow;
mod edge_cases;
