#![allow(dead_code)]
use alloy::sol;

sol!(
    #[sol(rpc)]
    contract Token {
        function name() external view returns (string name);
        function symbol() external view returns (string symbol);
        function decimals() external view returns (uint8 decimals);
        function totalSupply() external view returns (uint256 totalSupply);
        function balanceOf(address account) external view returns (uint256 balance);
        function transfer(address to, uint256 value) external returns (bool);

        error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);

        #[derive(Debug, PartialEq)]
        event Transfer(address indexed from, address indexed to, uint256 value);
    }
);
