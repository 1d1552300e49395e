mod health_contract;
